//! Data models for pricex.

pub mod amount;
pub mod config;

pub use amount::{AmountResult, CurrencyCode, UnknownCurrencyCode};
pub use config::{ExtractionConfig, OutputConfig, PricexConfig};
