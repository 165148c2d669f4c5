//! Single-amount extraction from raw scraped text.

use tracing::debug;

use crate::currency::{LocaleHint, detect_currency};
use crate::error::{AmountError, ConfigError};
use crate::models::amount::AmountResult;
use crate::models::config::ExtractionConfig;
use crate::text::TextSanitizer;

use super::FieldExtractor;
use super::numeric::normalize_numeric;

/// Amount field extractor.
#[derive(Debug, Clone, Default)]
pub struct AmountExtractor {
    locale: Option<LocaleHint>,
    sanitizer: TextSanitizer,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            locale: None,
            sanitizer: TextSanitizer::new(),
        }
    }

    /// Build an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            locale: config.locale_hint()?,
            sanitizer: TextSanitizer::new().with_whitespace_collapse(config.collapse_whitespace),
        })
    }

    /// Set the locale hint used for currency disambiguation.
    pub fn with_locale(mut self, locale: LocaleHint) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Set whether sanitization collapses interior whitespace.
    pub fn with_whitespace_collapse(mut self, collapse: bool) -> Self {
        self.sanitizer = self.sanitizer.with_whitespace_collapse(collapse);
        self
    }

    pub fn locale(&self) -> Option<&LocaleHint> {
        self.locale.as_ref()
    }

    /// Extract the amount, reporting why nothing was found.
    pub fn try_extract(&self, text: &str) -> Result<AmountResult, AmountError> {
        extract_with(&self.sanitizer, text, self.locale.as_ref())
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = AmountResult;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.try_extract(text)
            .map_err(|err| log_rejection(text, &err))
            .ok()
    }
}

/// Parse a monetary amount from HTML or plain text.
///
/// Returns `None` for empty input, input without digits, and malformed
/// numbers such as `"--12,50"`. A currency is attached when an ISO code, a
/// known symbol or the locale hint gives one.
///
/// ```
/// use pricex_core::{LocaleHint, parse_amount};
///
/// let canada: LocaleHint = "en-CA".parse().unwrap();
/// let result = parse_amount("$1,234.56", Some(&canada)).unwrap();
/// assert_eq!(result.amount(), 1234.56);
/// assert_eq!(result.currency_code(), Some("CAD"));
/// ```
pub fn parse_amount(text: &str, locale: Option<&LocaleHint>) -> Option<AmountResult> {
    extract_with(&TextSanitizer::new(), text, locale)
        .map_err(|err| log_rejection(text, &err))
        .ok()
}

fn extract_with(
    sanitizer: &TextSanitizer,
    text: &str,
    locale: Option<&LocaleHint>,
) -> Result<AmountResult, AmountError> {
    if text.trim().is_empty() {
        return Err(AmountError::EmptyInput);
    }

    let sanitized = sanitizer.sanitize(text);
    if sanitized.is_empty() {
        return Err(AmountError::EmptyInput);
    }

    let currency = detect_currency(&sanitized, locale);
    let amount = normalize_numeric(&sanitized)?;

    Ok(AmountResult::new(amount, currency))
}

// Scraped text may carry session tokens: log its size, never its content.
fn log_rejection(text: &str, err: &AmountError) {
    debug!(input_len = text.len(), "No amount extracted: {}", err);
}
