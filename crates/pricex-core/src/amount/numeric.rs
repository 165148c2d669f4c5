//! Numeric normalization of sanitized price text.

use crate::error::AmountError;

const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Reduce sanitized text to a canonical `int.frac` literal.
///
/// The rightmost `,` or `.` is the decimal separator; every other comma, dot
/// or apostrophe is a grouping separator. Letters, symbols and spaces are
/// discarded. An empty integer or fraction part defaults to `0`, so `"12."`
/// gives `12.0` and `".99"` gives `0.99`.
pub fn canonical_literal(text: &str) -> Result<String, AmountError> {
    let numeric: String = text
        .chars()
        .map(|c| if c == RIGHT_SINGLE_QUOTE { '\'' } else { c })
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '\'' | '+' | '-'))
        .collect();

    if !numeric.chars().any(|c| c.is_ascii_digit()) {
        return Err(AmountError::NoNumericContent);
    }

    let (integer_part, fraction_part) = match numeric.rfind([',', '.']) {
        Some(separator) => (
            keep_signed_digits(&numeric[..separator]),
            keep_digits(&numeric[separator + 1..]),
        ),
        None => (keep_signed_digits(&numeric), String::new()),
    };

    Ok(format!(
        "{}.{}",
        or_zero(integer_part),
        or_zero(fraction_part)
    ))
}

/// Parse sanitized text into an amount.
pub fn normalize_numeric(text: &str) -> Result<f64, AmountError> {
    let literal = canonical_literal(text)?;
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AmountError::UnparsableNumericLiteral { literal }),
    }
}

fn keep_signed_digits(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect()
}

fn keep_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn or_zero(part: String) -> String {
    if part.is_empty() { "0".to_string() } else { part }
}
