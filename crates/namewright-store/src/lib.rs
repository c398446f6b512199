//! Namewright Storage Layer
//!
//! Local file persistence for the two pieces of durable state:
//!
//! - [`JsonRuleStore`]: the ordered rule set, a JSON array of
//!   `[description, pattern]` pairs rewritten wholesale after every mutation
//! - [`CredentialStore`]: the API token, one line of plain text
//!
//! Both assume a single writer process; there is no file locking.
//!
//! # Examples
//!
//! ```no_run
//! use namewright_store::JsonRuleStore;
//! use namewright_domain::traits::RuleStore;
//!
//! let mut store = JsonRuleStore::new("rules.json");
//! let rules = store.load().unwrap();
//! assert!(!rules.is_empty()); // defaults are installed on first load
//! ```

#![warn(missing_docs)]

mod credential;
mod rules;

use thiserror::Error;

pub use credential::CredentialStore;
pub use rules::JsonRuleStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rule file could not be parsed or written
    #[error("Invalid rule file: {0}")]
    Json(#[from] serde_json::Error),

    /// No rule at the given position
    #[error("Rule not found: {0}")]
    NotFound(usize),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
