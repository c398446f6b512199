//! Violation module - non-compliant entries found by a validation pass

use std::path::PathBuf;

/// Why an entry failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    /// A rule's pattern did not match the entry name
    RuleFailed {
        /// One-based position of the rule in the rule set
        index: usize,
        /// Description of the rule
        description: String,
    },

    /// A regular file without an extension
    MissingExtension,

    /// Name longer than the allowed maximum
    NameTooLong {
        /// Length of the name in characters
        length: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl std::fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationReason::RuleFailed { index, description } => {
                write!(f, "Fails rule {}: {}", index, description)
            }
            ViolationReason::MissingExtension => f.write_str("File has no extension"),
            ViolationReason::NameTooLong { length, max } => {
                write!(f, "Name too long ({} > {} characters)", length, max)
            }
        }
    }
}

/// A non-compliant entry and every reason it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingViolation {
    /// Full path of the entry
    pub path: PathBuf,

    /// All failure reasons, rule failures first
    pub reasons: Vec<ViolationReason>,
}

impl NamingViolation {
    /// Base name of the offending entry
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// One-based indices of the rules this entry failed
    pub fn failed_rules(&self) -> Vec<usize> {
        self.reasons
            .iter()
            .filter_map(|r| match r {
                ViolationReason::RuleFailed { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Reasons rendered as text, joined with "; "
    pub fn summary(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
