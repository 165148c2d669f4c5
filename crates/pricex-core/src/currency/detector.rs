//! Currency resolution from ISO tokens, symbols and a locale hint.

use crate::amount::FieldExtractor;
use crate::models::amount::CurrencyCode;
use crate::patterns::ISO_TOKEN;

use super::locale::LocaleHint;
use super::symbols::{GLOBAL_CURRENCY_PRIORITY, find_symbol};

/// Currency field extractor bound to an optional locale hint.
#[derive(Debug, Clone, Default)]
pub struct CurrencyDetector {
    locale: Option<LocaleHint>,
}

impl CurrencyDetector {
    pub fn new() -> Self {
        Self { locale: None }
    }

    /// Set the locale used to disambiguate shared symbols.
    pub fn with_locale(mut self, locale: LocaleHint) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl FieldExtractor for CurrencyDetector {
    type Output = CurrencyCode;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        detect_currency(text, self.locale.as_ref())
    }
}

/// Resolve the currency of sanitized text.
///
/// First match wins:
/// 1. the first whole-word three-letter uppercase token, if it is an ISO code;
/// 2. the first known symbol, settled by the locale, then the global
///    priority list, then the symbol's own first candidate;
/// 3. the locale's native currency.
pub fn detect_currency(text: &str, locale: Option<&LocaleHint>) -> Option<CurrencyCode> {
    if text.trim().is_empty() {
        return None;
    }

    // Only the first token counts: "TTC 10 EUR" does not reach EUR.
    if let Some(code) = ISO_TOKEN
        .find(text)
        .and_then(|token| CurrencyCode::new(token.as_str()))
    {
        return Some(code);
    }

    let native = locale.and_then(LocaleHint::currency);

    if let Some((_, candidates)) = find_symbol(text) {
        return resolve_symbol(candidates, native);
    }

    native
}

fn resolve_symbol(candidates: &[&str], native: Option<CurrencyCode>) -> Option<CurrencyCode> {
    if let Some(native) = native {
        if candidates.contains(&native.as_str()) {
            return Some(native);
        }
    }

    GLOBAL_CURRENCY_PRIORITY
        .iter()
        .find(|preferred| candidates.contains(*preferred))
        .or_else(|| candidates.first())
        .and_then(|code| CurrencyCode::new(code))
}
