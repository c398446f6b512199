//! Integration tests for namewright-store
//!
//! These tests verify that every rule mutation is visible to a fresh store
//! reading the same file.

use namewright_domain::traits::RuleStore;
use namewright_domain::{default_rules, Rule};
use namewright_store::{CredentialStore, JsonRuleStore};
use tempfile::TempDir;

#[test]
fn test_first_load_yields_defaults_in_order() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonRuleStore::new(dir.path().join("rules.json"));

    let rules = store.load().unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules, default_rules());
}

#[test]
fn test_mutations_are_written_through() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");

    let mut store = JsonRuleStore::open(&path).unwrap();
    store.add("Lowercase only", "^[a-z]+$").unwrap();
    store.remove(0).unwrap();

    let reopened = JsonRuleStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 3);
    assert_eq!(reopened.list()[2], Rule::new("Lowercase only", "^[a-z]+$"));
    assert_eq!(reopened.list()[0], default_rules()[1]);
}

#[test]
fn test_edit_then_reopen_keeps_new_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");

    let mut store = JsonRuleStore::open(&path).unwrap();
    store.update(1, "No leading dot", "^[^.]").unwrap();

    let reopened = JsonRuleStore::open(&path).unwrap();
    let descriptions: Vec<_> = reopened.list().iter().map(|r| r.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Only letters, digits, underscores and hyphens",
            "Length between 1 and 255 characters",
            "No leading dot",
        ]
    );
}

#[test]
fn test_removing_every_rule_restores_defaults_on_next_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");

    let mut store = JsonRuleStore::open(&path).unwrap();
    for _ in 0..3 {
        store.remove(0).unwrap();
    }
    assert!(store.is_empty());

    let reopened = JsonRuleStore::open(&path).unwrap();
    assert_eq!(reopened.list(), default_rules().as_slice());
}

#[test]
fn test_credential_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("api_key");

    CredentialStore::new(&path).save("sk-abc").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "sk-abc");
    assert_eq!(CredentialStore::new(&path).load().unwrap().as_deref(), Some("sk-abc"));
}
