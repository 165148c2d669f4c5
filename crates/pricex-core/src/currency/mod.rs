//! ISO-4217 currency detection.

mod detector;
pub mod iso;
pub mod locale;
pub mod symbols;

pub use detector::{CurrencyDetector, detect_currency};
pub use iso::is_iso_currency;
pub use locale::{LocaleHint, region_currency};
pub use symbols::{GLOBAL_CURRENCY_PRIORITY, SYMBOL_CURRENCIES};
