//! Namewright Validator
//!
//! Checks the entries of a directory tree against the naming rules.
//!
//! The validator provides:
//! - Per-rule failure attribution for every in-scope entry
//! - The leading-dot exemption for files that carry an extension
//! - Rule-independent checks (missing extension, name too long)
//! - A text report of violations and the rules applied
//!
//! It never modifies the filesystem.
//!
//! # Examples
//!
//! ```no_run
//! use namewright_domain::{default_rules, Scope};
//! use namewright_validator::{NamingValidator, ValidationConfig};
//!
//! let validator = NamingValidator::new(default_rules(), ValidationConfig::default());
//! let violations = validator.validate("/path/to/photos", Scope::All).unwrap();
//! for v in &violations {
//!     println!("{}: {}", v.path.display(), v.summary());
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod validator;

pub use config::ValidationConfig;
pub use error::ValidatorError;
pub use report::ValidationReport;
pub use validator::{CompiledRule, NamingValidator};
