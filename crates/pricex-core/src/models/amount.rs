//! Extraction result types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::currency::iso;

/// A recognized ISO-4217 currency code.
///
/// Only codes from the built-in ISO table can be constructed, so holding a
/// `CurrencyCode` means the code is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct CurrencyCode(&'static str);

/// Rejected currency code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ISO-4217 currency code: {0}")]
pub struct UnknownCurrencyCode(pub String);

impl CurrencyCode {
    /// Look up a code (exact, uppercase) in the ISO table.
    pub fn new(code: &str) -> Option<Self> {
        iso::find(code).map(Self)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = UnknownCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or(UnknownCurrencyCode(value))
    }
}

// Reads an owned string; the stored code always points into the ISO table.
impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::try_from(code).map_err(serde::de::Error::custom)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0.to_string()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A monetary amount with an optional currency.
///
/// The amount is an `f64` for lightweight display and heuristics, not for
/// accounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountResult {
    amount: f64,
    #[serde(rename = "currency_code")]
    currency: Option<CurrencyCode>,
}

impl AmountResult {
    pub fn new(amount: f64, currency: Option<CurrencyCode>) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Detected currency, if any signal was available.
    pub fn currency(&self) -> Option<CurrencyCode> {
        self.currency
    }

    /// ISO code of the detected currency (`"EUR"`, `"USD"`, ...).
    pub fn currency_code(&self) -> Option<&'static str> {
        self.currency.map(|c| c.as_str())
    }

    pub fn has_currency(&self) -> bool {
        self.currency.is_some()
    }
}

impl fmt::Display for AmountResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency {
            Some(code) => write!(f, "{} {}", self.amount, code),
            None => write!(f, "{}", self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_currency_code_lookup() {
        assert_eq!(CurrencyCode::new("EUR").map(|c| c.as_str()), Some("EUR"));
        assert_eq!(CurrencyCode::new("eur"), None);
        assert_eq!(CurrencyCode::new("XYZ"), None);
        assert_eq!(
            CurrencyCode::try_from("TTC".to_string()),
            Err(UnknownCurrencyCode("TTC".to_string()))
        );
    }

    #[test]
    fn test_accessors() {
        let result = AmountResult::new(16.85, CurrencyCode::new("EUR"));
        assert_eq!(result.amount(), 16.85);
        assert_eq!(result.currency_code(), Some("EUR"));
        assert!(result.has_currency());

        let bare = AmountResult::new(1000.0, None);
        assert_eq!(bare.currency_code(), None);
        assert!(!bare.has_currency());
    }

    #[test]
    fn test_display() {
        assert_eq!(AmountResult::new(16.85, CurrencyCode::new("EUR")).to_string(), "16.85 EUR");
        assert_eq!(AmountResult::new(1000.0, None).to_string(), "1000");
    }

    #[test]
    fn test_serialization() {
        let result = AmountResult::new(1234.56, CurrencyCode::new("CAD"));
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json, serde_json::json!({"amount": 1234.56, "currency_code": "CAD"}));

        let back: AmountResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);

        let none = serde_json::to_value(AmountResult::new(5.0, None)).unwrap();
        assert_eq!(none, serde_json::json!({"amount": 5.0, "currency_code": null}));
    }

    #[test]
    fn test_deserialize_from_owned_input() {
        let json = String::from(r#"{"amount": 12.99, "currency_code": "CAD"}"#);
        let result: AmountResult = serde_json::from_str(&json).unwrap();
        drop(json);
        assert_eq!(result.currency_code(), Some("CAD"));

        let code: CurrencyCode = serde_json::from_value(serde_json::json!("CHF")).unwrap();
        assert_eq!(code.as_str(), "CHF");
    }

    #[test]
    fn test_rejects_unknown_code_on_deserialize() {
        let err = serde_json::from_str::<AmountResult>(r#"{"amount": 1.0, "currency_code": "ABC"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown ISO-4217 currency code: ABC"));
    }
}
