//! Namewright Domain Layer
//!
//! This crate contains the core domain model for Namewright. It has ZERO
//! external dependencies and defines the value objects and trait interfaces
//! that the store, provider, validator and renamer crates build on.
//!
//! ## Key Concepts
//!
//! - **Rule**: a `(description, pattern)` pair used to judge name compliance
//! - **Scope**: which entries an operation considers (files, folders, or all)
//! - **Naming violation**: a non-compliant entry and every reason it failed
//! - **Rename plan**: proposed replacement names for one directory level
//! - **Sanitization**: the transformation that makes a proposed name safe
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure logic only; no filesystem or network access
//! - Trait definitions for every external interaction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod plan;
pub mod rule;
pub mod sanitize;
pub mod scope;
pub mod traits;
pub mod violation;

// Re-exports for convenience
pub use plan::{RenamePlan, RenamePlanEntry};
pub use rule::{default_rules, Rule, DOT_PREFIX_RULE};
pub use sanitize::{sanitize, FORBIDDEN_CHARS, MAX_NAME_LENGTH};
pub use scope::Scope;
pub use violation::{NamingViolation, ViolationReason};
