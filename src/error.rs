//! Error types for word searches
//!
//! Every variant is a deterministic input error detected before any search
//! work begins. Callers report the message and exit non-successfully.

use thiserror::Error;

/// Errors surfaced by [`crate::finder::WordFinder`] and its strategies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// Empty letter set, too many letters, or characters outside A-Z
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Minimum word length outside `1..=letters`
    #[error("Minimum word length must be between 1 and the number of characters ({max}), got {min_length}")]
    InvalidArgument { min_length: usize, max: usize },

    /// Pattern has more positions than there are letters
    #[error("Pattern '{pattern}' has {pattern_len} positions but only {available} characters were given")]
    PatternTooLong {
        pattern: String,
        pattern_len: usize,
        available: usize,
    },

    /// A literal pattern character does not occur in the letters
    #[error("Pattern character '{invalid_char}' does not appear in '{letters}'")]
    InvalidPatternChar { invalid_char: char, letters: String },
}

impl FinderError {
    /// Stable short name of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "InvalidInput",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::PatternTooLong { .. } => "PatternTooLong",
            Self::InvalidPatternChar { .. } => "InvalidPatternChar",
        }
    }

    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for search operations
pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(FinderError::invalid_input("", "empty").code(), "InvalidInput");
        assert_eq!(
            FinderError::InvalidArgument { min_length: 5, max: 2 }.code(),
            "InvalidArgument"
        );
    }

    #[test]
    fn test_messages() {
        let err = FinderError::InvalidPatternChar {
            invalid_char: 'a',
            letters: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "Pattern character 'a' does not appear in 'xyz'");

        let err = FinderError::PatternTooLong {
            pattern: "____".to_string(),
            pattern_len: 4,
            available: 2,
        };
        assert!(err.to_string().contains("4 positions"));
    }
}
