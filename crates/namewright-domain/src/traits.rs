//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::Rule;
use std::error::Error;

/// Trait for persisting the ordered rule set
///
/// Implemented by the infrastructure layer (namewright-store). Every
/// mutating call persists the full rule set before returning.
pub trait RuleStore {
    /// Error type for store operations
    type Error;

    /// Read persisted rules, installing the defaults when none exist
    fn load(&mut self) -> Result<Vec<Rule>, Self::Error>;

    /// Current rules in order
    fn list(&self) -> &[Rule];

    /// Append a rule
    fn add(&mut self, description: &str, pattern: &str) -> Result<(), Self::Error>;

    /// Replace the rule at `index`
    ///
    /// The replacement is appended at the end rather than kept in place.
    fn update(&mut self, index: usize, description: &str, pattern: &str) -> Result<(), Self::Error>;

    /// Delete the rule at `index`, returning it
    fn remove(&mut self, index: usize) -> Result<Rule, Self::Error>;
}

/// Error raised by an LLM provider or name suggester
///
/// Separates failures that need a configuration change (a rejected or
/// missing credential, an unknown model) from transient ones.
pub trait CollaboratorError: Error + Send + Sync + 'static {
    /// Whether the failure stems from configuration rather than the service
    fn is_configuration(&self) -> bool {
        false
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (namewright-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with a system instruction in front of the prompt
    fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        self.generate(&format!("{}\n\n{}", system, prompt))
    }
}

/// Trait for the name suggestion collaborator
///
/// Given an instruction and an ordered list of current names, returns an
/// ordered list of replacement names. The same length is expected but not
/// guaranteed. Implemented by the application layer (namewright-renamer).
pub trait NameSuggester {
    /// Error type for suggestion calls
    type Error;

    /// Propose replacement names for `names`
    fn suggest_names(&self, instruction: &str, names: &[String]) -> Result<Vec<String>, Self::Error>;
}
