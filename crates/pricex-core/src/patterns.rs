//! Common regex patterns for text sanitization and currency scanning.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Any markup tag, comments and multi-line bodies included
    pub static ref HTML_TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();

    // Named character reference (&euro;, &nbsp;, ...)
    pub static ref HTML_ENTITY: Regex = Regex::new(r"&([A-Za-z]+);").unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Candidate ISO-4217 code: three uppercase letters as a whole word
    pub static ref ISO_TOKEN: Regex = Regex::new(r"\b[A-Z]{3}\b").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_tag_spans_lines() {
        assert!(HTML_TAG.is_match("<div\n class=\"price\">"));
        assert!(HTML_TAG.is_match("<!-- comment -->"));
        assert!(!HTML_TAG.is_match("1 < 2"));
    }

    #[test]
    fn test_iso_token_needs_word_boundaries() {
        assert_eq!(ISO_TOKEN.find("100 USD").map(|m| m.as_str()), Some("USD"));
        assert!(ISO_TOKEN.find("100USD").is_none());
        assert!(ISO_TOKEN.find("EURO").is_none());
        assert!(ISO_TOKEN.find("usd").is_none());
    }
}
