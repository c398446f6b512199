//! Error types for the CLI application.

use namewright_llm::LlmError;
use namewright_renamer::RenamerError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rule or credential storage error
    #[error(transparent)]
    Store(#[from] namewright_store::StoreError),

    /// LLM provider error
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Validation error
    #[error(transparent)]
    Validator(#[from] namewright_validator::ValidatorError),

    /// Planning or rename error
    #[error(transparent)]
    Renamer(#[from] RenamerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Hint shown after the error message, if any
    ///
    /// Looks through renamer errors, including aborted batches, to the
    /// provider failure or count mismatch that caused them.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Llm(e) => llm_hint(e),
            CliError::Renamer(e) => match e.root_cause() {
                RenamerError::CountMismatch { .. } => {
                    Some("Re-run with --accept-partial to apply the names that were returned")
                }
                _ => e.collaborator_source::<LlmError>().and_then(llm_hint),
            },
            _ => None,
        }
    }
}

fn llm_hint(error: &LlmError) -> Option<&'static str> {
    match error {
        LlmError::MissingCredential(_) => {
            Some("Store a key with 'namewright key set <token>' or set NAMEWRIGHT_API_KEY")
        }
        LlmError::Unauthorized(_) => {
            Some("The stored API key was rejected; replace it with 'namewright key set <token>'")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn mismatch() -> RenamerError {
        RenamerError::CountMismatch {
            directory: PathBuf::from("/photos"),
            requested: 3,
            received: 1,
        }
    }

    #[test]
    fn test_hint_for_count_mismatch_after_partial_batch() {
        let direct = CliError::from(mismatch());
        let aborted = CliError::from(RenamerError::Aborted {
            applied: 1,
            rolled_back: false,
            source: Box::new(mismatch()),
        });

        assert!(direct.hint().unwrap().contains("--accept-partial"));
        assert_eq!(aborted.hint(), direct.hint());
    }

    #[test]
    fn test_hint_for_rejected_key_inside_renamer_error() {
        let err = CliError::from(RenamerError::collaborator(LlmError::Unauthorized("HTTP 401".into())));
        assert!(err.hint().unwrap().contains("key set"));

        let transient = CliError::from(RenamerError::collaborator(LlmError::Timeout(60)));
        assert!(transient.hint().is_none());
    }

    #[test]
    fn test_hint_for_missing_credential() {
        let err = CliError::from(LlmError::MissingCredential("openai".into()));
        assert!(err.hint().unwrap().contains("NAMEWRIGHT_API_KEY"));
    }
}
