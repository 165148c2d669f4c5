//! WASM bindings for pricex.
//!
//! Lets browser and Node.js collectors run the same amount extraction as the
//! native crates.

use wasm_bindgen::prelude::*;

use pricex_core::{AmountExtractor, FieldExtractor, LocaleHint};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse a monetary amount from HTML or text.
///
/// Returns `{ amount, currency_code }` or `undefined` when the text holds no
/// amount. Throws if `locale` is not a valid tag.
#[wasm_bindgen(js_name = parseAmount)]
pub fn parse_amount(text: &str, locale: Option<String>) -> Result<JsValue, JsValue> {
    let locale = parse_locale(locale)?;
    match pricex_core::parse_amount(text, locale.as_ref()) {
        Some(result) => serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Strip tags and entities from an HTML fragment.
#[wasm_bindgen]
pub fn sanitize(text: &str) -> String {
    pricex_core::sanitize(text)
}

/// Resolve the currency of a text without parsing the amount.
#[wasm_bindgen(js_name = detectCurrency)]
pub fn detect_currency(text: &str, locale: Option<String>) -> Result<Option<String>, JsValue> {
    let locale = parse_locale(locale)?;
    let sanitized = pricex_core::sanitize(text);
    Ok(pricex_core::detect_currency(&sanitized, locale.as_ref()).map(|c| c.to_string()))
}

/// Check whether a code is a recognized ISO-4217 currency.
#[wasm_bindgen(js_name = isIsoCurrency)]
pub fn is_iso_currency(code: &str) -> bool {
    pricex_core::is_iso_currency(code)
}

/// Amount parser bound to a locale, for repeated use in the browser.
#[wasm_bindgen]
pub struct AmountParser {
    extractor: AmountExtractor,
}

#[wasm_bindgen]
impl AmountParser {
    /// Create a parser, optionally with a locale hint such as "fr-FR".
    #[wasm_bindgen(constructor)]
    pub fn new(locale: Option<String>) -> Result<AmountParser, JsValue> {
        let extractor = match parse_locale(locale)? {
            Some(hint) => AmountExtractor::new().with_locale(hint),
            None => AmountExtractor::new(),
        };
        Ok(Self { extractor })
    }

    /// Locale hint in normalized form, if any.
    #[wasm_bindgen(getter)]
    pub fn locale(&self) -> Option<String> {
        self.extractor.locale().map(|l| l.to_string())
    }

    /// Parse one text; `undefined` when it holds no amount.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        match self.extractor.extract(text) {
            Some(result) => serde_wasm_bindgen::to_value(&result)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}

fn parse_locale(locale: Option<String>) -> Result<Option<LocaleHint>, JsValue> {
    locale
        .filter(|tag| !tag.trim().is_empty())
        .map(|tag| tag.parse::<LocaleHint>())
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_sanitize() {
        assert_eq!(sanitize("<span>16,85&nbsp;&euro;</span>"), "16,85 €");
    }

    #[wasm_bindgen_test]
    fn test_detect_currency() {
        assert_eq!(
            detect_currency("$1,234.56", Some("en-CA".to_string())).unwrap(),
            Some("CAD".to_string())
        );
        assert_eq!(detect_currency("1000", None).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_is_iso_currency() {
        assert!(is_iso_currency("CHF"));
        assert!(!is_iso_currency("TTC"));
    }

    #[wasm_bindgen_test]
    fn test_parser_locale() {
        let parser = AmountParser::new(Some("fr_fr".to_string())).unwrap();
        assert_eq!(parser.locale(), Some("fr-FR".to_string()));

        let blank = AmountParser::new(Some("  ".to_string())).unwrap();
        assert_eq!(blank.locale(), None);
    }
}
