//! Error types for planning and executing renames

use namewright_domain::traits::CollaboratorError;
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while planning or applying renames
#[derive(Error, Debug)]
pub enum RenamerError {
    /// The name suggestion collaborator or LLM provider failed
    #[error("Collaborator error: {source}")]
    Collaborator {
        /// Whether the failure needs a configuration change
        configuration: bool,
        /// Provider error
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The target is missing or not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Filesystem failure
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or renamed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// The rename target already exists
    #[error("Cannot rename {from} to {to}: target already exists")]
    Collision {
        /// Current path
        from: PathBuf,
        /// Proposed path
        to: PathBuf,
    },

    /// The proposed name is unusable after sanitization
    #[error("Invalid name {name:?} proposed for {from}")]
    InvalidName {
        /// Entry that would be renamed
        from: PathBuf,
        /// Sanitized proposal
        name: String,
    },

    /// The collaborator returned fewer names than requested
    #[error("Collaborator returned {received} names for {requested} entries in {directory}")]
    CountMismatch {
        /// Directory being planned
        directory: PathBuf,
        /// Names sent
        requested: usize,
        /// Names returned
        received: usize,
    },

    /// A generated rule pattern does not compile
    #[error("Generated pattern {pattern:?} is invalid: {reason}")]
    InvalidPattern {
        /// The pattern as returned
        pattern: String,
        /// Compilation failure
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A batch stopped part way through
    #[error("{source} ({})", abort_summary(.applied, .rolled_back))]
    Aborted {
        /// Renames applied before the failure
        applied: usize,
        /// Whether the applied renames were undone
        rolled_back: bool,
        /// The failure that stopped the batch
        #[source]
        source: Box<RenamerError>,
    },
}

fn abort_summary(applied: &usize, rolled_back: &bool) -> String {
    if *rolled_back {
        format!("{} renames applied, rolled back", applied)
    } else {
        format!("{} renames applied", applied)
    }
}

impl RenamerError {
    /// Wrap an I/O failure with the path involved
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenamerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a provider failure, keeping its type for later inspection
    pub fn collaborator<E: CollaboratorError>(source: E) -> Self {
        RenamerError::Collaborator {
            configuration: source.is_configuration(),
            source: Box::new(source),
        }
    }

    /// The provider error behind a collaborator failure, if it is an `E`
    pub fn collaborator_source<E: StdError + 'static>(&self) -> Option<&E> {
        match self.root_cause() {
            RenamerError::Collaborator { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// The failure that caused this error, looking through [`RenamerError::Aborted`]
    pub fn root_cause(&self) -> &RenamerError {
        match self {
            RenamerError::Aborted { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether the error stems from configuration rather than the filesystem or service
    pub fn is_configuration(&self) -> bool {
        match self.root_cause() {
            RenamerError::Config(_) => true,
            RenamerError::Collaborator { configuration, .. } => *configuration,
            _ => false,
        }
    }
}

/// Result alias for renamer operations
pub type Result<T> = std::result::Result<T, RenamerError>;
