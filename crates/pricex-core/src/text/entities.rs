//! Fixed table of HTML entities decoded during sanitization.

/// Entity name (without `&` and `;`) and its replacement.
static ENTITIES: &[(&str, &str)] = &[
    // Markup
    ("lt", "<"),
    ("gt", ">"),
    ("amp", "&"),
    ("quot", "\""),
    ("apos", "'"),
    // ISO-8859-1
    ("nbsp", "\u{00a0}"),
    ("iexcl", "¡"),
    ("copy", "©"),
    ("reg", "®"),
    ("trade", "™"),
    ("times", "×"),
    ("divide", "÷"),
    // Currency symbols
    ("cent", "¢"),
    ("pound", "£"),
    ("yen", "¥"),
    ("euro", "€"),
    ("dollar", "$"),
    ("franc", "₣"),
    ("lira", "₤"),
    ("baht", "฿"),
    ("riel", "៛"),
    ("tugrik", "₮"),
    ("tenge", "₸"),
    ("won", "₩"),
    ("kip", "₭"),
    ("rupee", "₹"),
    ("peso", "₱"),
];

/// Look up the replacement for an entity name. Names are case-sensitive.
pub fn lookup(name: &str) -> Option<&'static str> {
    ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, replacement)| *replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("euro"), Some("€"));
        assert_eq!(lookup("nbsp"), Some("\u{00a0}"));
        assert_eq!(lookup("Euro"), None);
        assert_eq!(lookup("hellip"), None);
    }
}
