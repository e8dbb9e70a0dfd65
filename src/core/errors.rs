//! Shared error types for the application
//!
//! Analysis itself never fails; errors only arise while loading
//! configuration and building a rule catalog from it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for codecat operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A rule pattern failed to compile
    #[error("Invalid rule pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a pattern error for a rule that did not compile
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_mentions_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::pattern("(", source);
        assert!(err.to_string().contains("Invalid rule pattern `(`"));
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("max_results must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: max_results must be positive"
        );
    }
}
