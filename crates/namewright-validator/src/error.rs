//! Validator error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during validation
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A rule pattern is not a valid regular expression
    #[error("Configuration error: rule {index} ('{description}') has an invalid pattern: {source}")]
    InvalidPattern {
        /// One-based rule position
        index: usize,
        /// Rule description
        description: String,
        /// Compilation failure
        #[source]
        source: regex::Error,
    },

    /// The root is missing or not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ValidatorError {
    /// Whether the error is a configuration problem (as opposed to bad input)
    pub fn is_configuration(&self) -> bool {
        matches!(self, ValidatorError::InvalidPattern { .. } | ValidatorError::Config(_))
    }
}
