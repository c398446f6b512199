//! Plan module - proposed renames for one directory level

use crate::sanitize::sanitize;
use std::path::{Path, PathBuf};

/// One proposed rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlanEntry {
    /// Current base name
    pub old_name: String,

    /// Name exactly as the collaborator returned it
    pub new_name_raw: String,

    /// Filesystem-safe version of `new_name_raw`
    pub new_name_sanitized: String,
}

impl RenamePlanEntry {
    /// Build an entry, sanitizing the proposed name
    pub fn new(old_name: impl Into<String>, new_name_raw: impl Into<String>) -> Self {
        let new_name_raw = new_name_raw.into();
        let new_name_sanitized = sanitize(&new_name_raw);
        Self {
            old_name: old_name.into(),
            new_name_raw,
            new_name_sanitized,
        }
    }

    /// Whether applying this entry would leave the name unchanged
    pub fn is_noop(&self) -> bool {
        self.old_name == self.new_name_sanitized
    }
}

/// Proposed renames for the entries of a single directory
///
/// Entries are paired with the original names strictly by position. When
/// the collaborator returns fewer names than requested the trailing
/// originals are absent from `entries`, and [`RenamePlan::is_partial`]
/// reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Directory the entries live in
    pub directory: PathBuf,

    /// Paired entries, in the order the names were requested
    pub entries: Vec<RenamePlanEntry>,

    /// Number of names sent to the collaborator
    pub requested: usize,

    /// Number of names the collaborator returned
    pub received: usize,
}

impl RenamePlan {
    /// Pair original names with proposed names by index
    ///
    /// Extra proposals beyond the number of originals are ignored.
    pub fn pair(directory: impl Into<PathBuf>, originals: &[String], proposed: &[String]) -> Self {
        let entries = originals
            .iter()
            .zip(proposed.iter())
            .map(|(old, new)| RenamePlanEntry::new(old.clone(), new.clone()))
            .collect();

        Self {
            directory: directory.into(),
            entries,
            requested: originals.len(),
            received: proposed.len(),
        }
    }

    /// An empty plan for a directory with nothing in scope
    pub fn empty(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            entries: Vec::new(),
            requested: 0,
            received: 0,
        }
    }

    /// Whether fewer names came back than were requested
    pub fn is_partial(&self) -> bool {
        self.received < self.requested
    }

    /// Number of originals left out of the plan
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.received)
    }

    /// Whether the plan has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the plan
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Source and target paths for an entry
    pub fn paths_for(&self, entry: &RenamePlanEntry) -> (PathBuf, PathBuf) {
        paths_in(&self.directory, entry)
    }
}

fn paths_in(directory: &Path, entry: &RenamePlanEntry) -> (PathBuf, PathBuf) {
    (
        directory.join(&entry.old_name),
        directory.join(&entry.new_name_sanitized),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_entry_sanitizes() {
        let entry = RenamePlanEntry::new("a.txt", "new name?.txt");
        assert_eq!(entry.new_name_raw, "new name?.txt");
        assert_eq!(entry.new_name_sanitized, "new_name.txt");
        assert!(!entry.is_noop());
        assert!(RenamePlanEntry::new("same.txt", "same.txt").is_noop());
    }

    #[test]
    fn test_pair_equal_lengths() {
        let plan = RenamePlan::pair("/d", &names(&["a", "b"]), &names(&["x", "y"]));
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.entries[1].old_name, "b");
        assert_eq!(plan.entries[1].new_name_sanitized, "y");
        assert!(!plan.is_partial());
    }

    #[test]
    fn test_pair_short_response_truncates() {
        let plan = RenamePlan::pair("/d", &names(&["a", "b", "c"]), &names(&["x"]));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries[0].old_name, "a");
        assert!(plan.is_partial());
        assert_eq!(plan.shortfall(), 2);
    }

    #[test]
    fn test_pair_long_response_ignores_extra() {
        let plan = RenamePlan::pair("/d", &names(&["a"]), &names(&["x", "y"]));
        assert_eq!(plan.len(), 1);
        assert!(!plan.is_partial());
        assert_eq!(plan.shortfall(), 0);
    }

    #[test]
    fn test_paths_for() {
        let plan = RenamePlan::pair("/d", &names(&["a b"]), &names(&["c d"]));
        let (from, to) = plan.paths_for(&plan.entries[0]);
        assert_eq!(from, PathBuf::from("/d/a b"));
        assert_eq!(to, PathBuf::from("/d/c_d"));
    }

    #[test]
    fn test_empty_plan() {
        let plan = RenamePlan::empty("/d");
        assert!(plan.is_empty());
        assert!(!plan.is_partial());
    }
}
