//! Core library for extracting monetary amounts from scraped web text.
//!
//! This crate provides:
//! - HTML-to-text sanitization (tags, entities, exotic spaces)
//! - Numeric normalization across grouping/decimal punctuation conventions
//! - ISO-4217 currency detection from codes, symbols and a locale hint
//! - A single-amount extractor combining the above

pub mod amount;
pub mod currency;
pub mod error;
pub mod models;
pub mod patterns;
pub mod text;

pub use amount::{AmountExtractor, FieldExtractor, canonical_literal, normalize_numeric, parse_amount};
pub use currency::{CurrencyDetector, LocaleHint, detect_currency, is_iso_currency};
pub use error::{AmountError, ConfigError, LocaleError};
pub use models::amount::{AmountResult, CurrencyCode};
pub use models::config::PricexConfig;
pub use text::{TextSanitizer, html_to_text, sanitize};
