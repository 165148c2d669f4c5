//! Currency symbol table and global tie-break priority.

/// Symbols and the ISO codes sharing them, searched in this order.
///
/// Prefixed dollar signs and other multi-character symbols come before the
/// single characters they contain, so `US$` is seen before `S$` and `$`.
/// Symbols starting with a letter only match when no ASCII letter precedes
/// them, so `CA$` never reads as `A$`.
pub static SYMBOL_CURRENCIES: &[(&str, &[&str])] = &[
    ("US$", &["USD"]),
    ("NZ$", &["NZD"]),
    ("HK$", &["HKD"]),
    ("MX$", &["MXN"]),
    ("CA$", &["CAD"]),
    ("R$", &["BRL"]),
    ("C$", &["CAD"]),
    ("A$", &["AUD"]),
    ("S$", &["SGD"]),
    ("$", &["USD", "EUR", "CAD", "AUD", "NZD", "SGD", "HKD", "MXN"]),
    ("€", &["EUR"]),
    ("£", &["GBP"]),
    ("¥", &["JPY", "CNY"]),
    ("₹", &["INR"]),
    ("₩", &["KRW"]),
    ("₽", &["RUB"]),
    ("₺", &["TRY"]),
    ("₫", &["VND"]),
    ("zł", &["PLN"]),
    ("₱", &["PHP"]),
    ("฿", &["THB"]),
    ("₪", &["ILS"]),
    ("₴", &["UAH"]),
    ("₦", &["NGN"]),
    ("₸", &["KZT"]),
];

/// Most widely used currencies, consulted when the locale does not settle a shared symbol.
pub static GLOBAL_CURRENCY_PRIORITY: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CNY", "CAD", "AUD", "CHF", "INR",
];

/// First table symbol present anywhere in `text`, with its candidates.
pub fn find_symbol(text: &str) -> Option<(&'static str, &'static [&'static str])> {
    SYMBOL_CURRENCIES
        .iter()
        .find(|(symbol, _)| contains_symbol(text, symbol))
        .copied()
}

fn contains_symbol(text: &str, symbol: &str) -> bool {
    if !symbol.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return text.contains(symbol);
    }
    text.match_indices(symbol).any(|(start, _)| {
        !text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphabetic())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::iso::is_iso_currency;

    #[test]
    fn test_tables_only_reference_iso_codes() {
        for (symbol, candidates) in SYMBOL_CURRENCIES {
            assert!(!candidates.is_empty(), "{symbol} has no candidates");
            for code in candidates.iter() {
                assert!(is_iso_currency(code), "{symbol} -> {code}");
            }
        }
        assert!(GLOBAL_CURRENCY_PRIORITY.iter().all(|c| is_iso_currency(c)));
    }

    #[test]
    fn test_prefixed_symbols_shadow_bare_ones() {
        for (i, (symbol, _)) in SYMBOL_CURRENCIES.iter().enumerate() {
            for (later, _) in &SYMBOL_CURRENCIES[i + 1..] {
                assert!(
                    !later.contains(symbol),
                    "{later} must be listed before {symbol}"
                );
            }
        }
    }

    #[test]
    fn test_prefixed_symbol_needs_word_start() {
        assert_eq!(find_symbol("BA$ 5").map(|(s, _)| s), Some("$"));
        assert_eq!(find_symbol("12,99PLNzł").map(|(s, _)| s), None);
        assert_eq!(find_symbol("XUS$ 5 or US$ 6").map(|(s, _)| s), Some("US$"));
    }

    #[test]
    fn test_find_symbol() {
        assert_eq!(find_symbol("16,85 €").map(|(s, _)| s), Some("€"));
        assert_eq!(find_symbol("US$ 10").map(|(s, _)| s), Some("US$"));
        assert_eq!(find_symbol("S$ 10").map(|(s, _)| s), Some("S$"));
        assert_eq!(find_symbol("$10").map(|(s, _)| s), Some("$"));
        assert_eq!(find_symbol("12,99 zł").map(|(s, _)| s), Some("zł"));
        assert_eq!(find_symbol("CA$12.99").map(|(s, _)| s), Some("CA$"));
        assert_eq!(find_symbol("A$12.99").map(|(s, _)| s), Some("A$"));
        assert_eq!(find_symbol("(A$12.99)").map(|(s, _)| s), Some("A$"));
        assert!(find_symbol("1000").is_none());
    }
}
