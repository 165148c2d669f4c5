//! Error types for the pricex-core library.

use thiserror::Error;

/// Reasons an input yields no amount.
///
/// None of these escape [`crate::parse_amount`]; they are available through
/// [`crate::AmountExtractor::try_extract`] for callers that want the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Input was empty, whitespace-only, or markup-only.
    #[error("input is empty")]
    EmptyInput,

    /// No digit survived numeric cleanup.
    #[error("no numeric content")]
    NoNumericContent,

    /// The canonical literal is not a valid number.
    #[error("unparsable numeric literal: {literal}")]
    UnparsableNumericLiteral { literal: String },
}

/// Errors related to locale hint parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag was empty.
    #[error("empty locale tag")]
    Empty,

    /// A subtag is malformed.
    #[error("invalid subtag '{subtag}' in locale tag '{tag}'")]
    InvalidSubtag { tag: String, subtag: String },
}

/// Errors related to configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read or write the file.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for the config schema.
    #[error("invalid config file: {0}")]
    Format(#[from] serde_json::Error),

    /// A field holds an unusable value.
    #[error("invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_error_messages() {
        assert_eq!(AmountError::EmptyInput.to_string(), "input is empty");
        assert_eq!(
            AmountError::UnparsableNumericLiteral {
                literal: "--12.50".to_string()
            }
            .to_string(),
            "unparsable numeric literal: --12.50"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::Validation {
            field: "extraction.default_locale".to_string(),
            reason: LocaleError::Empty.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for extraction.default_locale: empty locale tag"
        );

        let io: ConfigError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(io, ConfigError::Io(_)));
    }
}
