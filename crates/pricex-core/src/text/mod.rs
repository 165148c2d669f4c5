//! HTML-to-text sanitization.
//!
//! Scraped price fragments arrive as markup (`<span>16,85&nbsp;€</span>`).
//! Sanitizing decodes entities, drops tags, turns no-break spaces into plain
//! spaces and trims. The result is stable: sanitizing twice changes nothing.

mod entities;

use regex::Captures;

use crate::patterns::{HTML_ENTITY, HTML_TAG, WHITESPACE_RUN};

pub use entities::lookup as lookup_entity;

const NO_BREAK_SPACE: char = '\u{00a0}';
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// Sanitizer with a fixed whitespace policy.
#[derive(Debug, Clone, Copy)]
pub struct TextSanitizer {
    collapse_whitespace: bool,
}

impl TextSanitizer {
    /// Create a sanitizer that collapses interior whitespace runs.
    pub fn new() -> Self {
        Self {
            collapse_whitespace: true,
        }
    }

    /// Set whether interior whitespace runs collapse to a single space.
    pub fn with_whitespace_collapse(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    pub fn sanitize(&self, text: &str) -> String {
        html_to_text(text, self.collapse_whitespace)
    }
}

impl Default for TextSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanitize with whitespace collapsing, as the amount extractor does.
pub fn sanitize(text: &str) -> String {
    html_to_text(text, true)
}

/// Convert an HTML fragment into plain text.
///
/// Entities are decoded first (repeatedly, so `&amp;euro;` becomes `€`),
/// then every tag is replaced by a space. No-break and narrow no-break spaces
/// become regular spaces and the result is trimmed. With
/// `collapse_whitespace`, interior runs of whitespace become one space.
pub fn html_to_text(text: &str, collapse_whitespace: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    let decoded = decode_entities(text);
    let stripped = HTML_TAG.replace_all(&decoded, " ");
    let spaced = stripped.replace([NO_BREAK_SPACE, NARROW_NO_BREAK_SPACE], " ");

    if collapse_whitespace {
        WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
    } else {
        spaced.trim().to_string()
    }
}

/// Decode known entities until none are left. Unknown entities stay verbatim.
fn decode_entities(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = HTML_ENTITY
            .replace_all(&current, |caps: &Captures| {
                lookup_entity(&caps[1]).unwrap_or(&caps[0]).to_string()
            })
            .into_owned();
        // Every decoded entity shortens the text, so this terminates.
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(html_to_text("", false), "");
        assert_eq!(sanitize("   \n\t "), "");
    }

    #[test]
    fn test_strips_tags_and_decodes_entities() {
        let html = "\n\t  <div class=\"price\">  <span>\n16,85&nbsp;€</span>  </div>  ";
        assert_eq!(sanitize(html), "16,85 €");
    }

    #[test]
    fn test_strips_comments_and_multiline_tags() {
        let html = "<span\n style='color:red'>99,90</span><!-- promo -->";
        assert_eq!(sanitize(html), "99,90");
    }

    #[test]
    fn test_decodes_currency_entities() {
        assert_eq!(sanitize("&pound;12 &amp; &yen;3"), "£12 & ¥3");
        assert_eq!(sanitize("&dollar;5&thinsp;"), "$5&thinsp;");
    }

    #[test]
    fn test_decodes_double_encoded_entities() {
        assert_eq!(sanitize("10&amp;nbsp;&amp;euro;"), "10 €");
    }

    #[test]
    fn test_decoded_markup_is_stripped() {
        assert_eq!(sanitize("&lt;b&gt;Hello &amp; welcome!&lt;/b&gt;"), "Hello & welcome!");
    }

    #[test]
    fn test_converts_exotic_spaces() {
        assert_eq!(sanitize("1\u{202f}234\u{00a0}€"), "1 234 €");
    }

    #[test]
    fn test_whitespace_policy() {
        let text = "   Hello   &nbsp;   World   ";
        assert_eq!(html_to_text(text, true), "Hello World");
        assert_eq!(html_to_text(text, false), "Hello       World");

        let keep = TextSanitizer::new().with_whitespace_collapse(false);
        assert_eq!(keep.sanitize(" a \t b "), "a \t b");
        assert_eq!(TextSanitizer::default().sanitize(" a \t b "), "a b");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "  <span>16,85&nbsp;€</span>  ",
            "&amp;lt;b&amp;gt;x&amp;lt;/b&amp;gt;",
            "a &lt; b",
            "1 < 2 > 0",
            "<<b>>",
            "&amp;amp;amp;",
            "&unknown; 5",
            "\u{00a0} 12\u{202f}000 \u{00a0}",
            " \n\t1\t000\n€\n",
        ];
        for input in inputs {
            for collapse in [true, false] {
                let once = html_to_text(input, collapse);
                assert_eq!(html_to_text(&once, collapse), once, "input: {input:?}");
            }
        }
    }
}
