//! JSON-file rule repository

use crate::StoreError;
use namewright_domain::traits::RuleStore;
use namewright_domain::{default_rules, Rule};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rule repository persisted as a JSON array of `[description, pattern]` pairs
///
/// The in-memory list is the source of truth between calls; every mutation
/// rewrites the whole file.
#[derive(Debug)]
pub struct JsonRuleStore {
    path: PathBuf,
    rules: Vec<Rule>,
}

impl JsonRuleStore {
    /// Create a store backed by `path`
    ///
    /// Nothing is read until [`RuleStore::load`] is called.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            rules: Vec::new(),
        }
    }

    /// Create a store and load it immediately
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at a zero-based position
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Replace the rule set with the defaults and persist
    pub fn reset_to_defaults(&mut self) -> Result<(), StoreError> {
        self.rules = default_rules();
        self.save()
    }

    /// Read the rule file, or `None` when it does not exist
    fn read_file(&self) -> Result<Option<Vec<Rule>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let pairs: Vec<(String, String)> = serde_json::from_str(&contents)?;
        Ok(Some(pairs.into_iter().map(Rule::from).collect()))
    }

    /// Rewrite the rule file from the in-memory list
    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let pairs: Vec<(&str, &str)> = self
            .rules
            .iter()
            .map(|r| (r.description.as_str(), r.pattern.as_str()))
            .collect();
        fs::write(&self.path, serde_json::to_string(&pairs)?)?;

        debug!("Saved {} rules to {}", self.rules.len(), self.path.display());
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index >= self.rules.len() {
            return Err(StoreError::NotFound(index));
        }
        Ok(())
    }
}

impl RuleStore for JsonRuleStore {
    type Error = StoreError;

    fn load(&mut self) -> Result<Vec<Rule>, Self::Error> {
        match self.read_file()? {
            Some(rules) if !rules.is_empty() => {
                info!("Loaded {} rules from {}", rules.len(), self.path.display());
                self.rules = rules;
            }
            _ => {
                info!("No persisted rules at {}, installing defaults", self.path.display());
                self.reset_to_defaults()?;
            }
        }
        Ok(self.rules.clone())
    }

    fn list(&self) -> &[Rule] {
        &self.rules
    }

    fn add(&mut self, description: &str, pattern: &str) -> Result<(), Self::Error> {
        self.rules.push(Rule::new(description, pattern));
        self.save()
    }

    fn update(&mut self, index: usize, description: &str, pattern: &str) -> Result<(), Self::Error> {
        self.check_index(index)?;
        self.rules.remove(index);
        self.rules.push(Rule::new(description, pattern));
        self.save()
    }

    fn remove(&mut self, index: usize) -> Result<Rule, Self::Error> {
        self.check_index(index)?;
        let removed = self.rules.remove(index);
        self.save()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonRuleStore {
        JsonRuleStore::new(dir.path().join("rules.json"))
    }

    #[test]
    fn test_missing_file_installs_defaults() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let rules = store.load().unwrap();
        assert_eq!(rules, default_rules());
        assert!(store.path().exists(), "defaults should be persisted");
    }

    #[test]
    fn test_empty_array_installs_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rules.json"), "[]").unwrap();
        let mut store = store_in(&dir);

        assert_eq!(store.load().unwrap(), default_rules());
    }

    #[test]
    fn test_file_format_is_array_of_pairs() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();
        store.add("Lowercase", "^[a-z]+$").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let last = &value.as_array().unwrap()[3];
        assert_eq!(last, &serde_json::json!(["Lowercase", "^[a-z]+$"]));
    }

    #[test]
    fn test_update_moves_rule_to_end() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();

        store.update(0, "Edited", "^x").unwrap();
        let rules = store.list();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[2], Rule::new("Edited", "^x"));
        assert_eq!(rules[0], default_rules()[1]);
    }

    #[test]
    fn test_out_of_range_index() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();

        assert!(matches!(store.remove(9), Err(StoreError::NotFound(9))));
        assert!(matches!(store.update(3, "d", "p"), Err(StoreError::NotFound(3))));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rules.json"), "{not json").unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }
}
