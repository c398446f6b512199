//! End-to-end workflows through the CLI context with the mock provider

use namewright_cli::config::OutputFormat;
use namewright_cli::{CliError, Config, Context, Formatter};
use namewright_domain::traits::RuleStore;
use namewright_domain::Scope;
use namewright_llm::{MockProvider, ProviderKind};
use namewright_renamer::{BatchExecutor, LlmNameSuggester, RenamePlanner, RenamerConfig, RenamerError};
use std::fs;
use tempfile::TempDir;

fn context(data: &TempDir, mock_response: &str) -> Context {
    let mut config = Config::default();
    config.provider.kind = ProviderKind::Mock;
    config.provider.mock_response = Some(mock_response.to_string());
    config.paths.rules_file = Some(data.path().join("rules.json"));
    config.paths.credential_file = Some(data.path().join("api_key"));

    Context::new(
        config,
        data.path().join("config.toml"),
        Formatter::new(OutputFormat::Json, false),
        None,
    )
}

#[test]
fn test_check_then_rename_fixes_violations() {
    let data = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    fs::write(tree.path().join("My Holiday.jpg"), "").unwrap();
    fs::write(tree.path().join("notes.txt"), "").unwrap();

    let ctx = context(&data, "my_holiday.jpg\nnotes.txt");

    let before = ctx.validator().unwrap().validate(tree.path(), Scope::Files).unwrap();
    assert_eq!(before.len(), 2);

    let report = ctx
        .executor(false, false)
        .unwrap()
        .execute(tree.path(), "snake case", Scope::Files)
        .unwrap();
    assert_eq!(report.renamed.len(), 1);
    assert_eq!(report.unchanged, 1);

    let after = ctx.validator().unwrap().validate(tree.path(), Scope::Files).unwrap();
    // Only the dot in the extension trips the character-set rule now
    assert!(after.iter().all(|v| v.failed_rules() == vec![1]));
    assert!(tree.path().join("my_holiday.jpg").exists());
}

#[test]
fn test_rules_persist_between_contexts() {
    let data = TempDir::new().unwrap();

    {
        let ctx = context(&data, "unused");
        let mut store = ctx.rule_store().unwrap();
        store.add("No uppercase", "^[^A-Z]*$").unwrap();
        store.remove(0).unwrap();
    }

    let ctx = context(&data, "unused");
    let store = ctx.rule_store().unwrap();
    let descriptions: Vec<_> = store.list().iter().map(|r| r.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Must not start with a dot",
            "Length between 1 and 255 characters",
            "No uppercase"
        ]
    );
}

#[test]
fn test_generated_rule_is_validated() {
    let data = TempDir::new().unwrap();
    let ctx = context(&data, "`^[a-z0-9_]+$`");

    let rule = ctx.assistant().unwrap().generate_rule("lowercase snake case").unwrap();
    assert_eq!(rule.pattern, "^[a-z0-9_]+$");
    assert_eq!(rule.description, "lowercase snake case");
}

#[test]
fn test_preview_does_not_rename() {
    let data = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    fs::write(tree.path().join("a.txt"), "").unwrap();

    let ctx = context(&data, "b.txt");
    let plan = ctx.planner().unwrap().preview(tree.path(), "rename").unwrap();

    assert_eq!(plan.entries[0].new_name_sanitized, "b.txt");
    assert!(tree.path().join("a.txt").exists());
    assert!(!tree.path().join("b.txt").exists());
}

#[test]
fn test_short_answer_after_earlier_renames_keeps_partial_hint() {
    let tree = TempDir::new().unwrap();
    fs::create_dir(tree.path().join("sub")).unwrap();
    fs::write(tree.path().join("sub").join("inner.txt"), "").unwrap();
    fs::write(tree.path().join("a.txt"), "").unwrap();
    fs::write(tree.path().join("b.txt"), "").unwrap();

    // Bottom-up: "sub" is planned first, then the root with three entries
    let llm = MockProvider::default();
    llm.push_response("renamed.txt");
    llm.push_response("only_one.txt");
    let executor = BatchExecutor::new(RenamePlanner::new(
        LlmNameSuggester::new(llm),
        RenamerConfig::default(),
    ));

    let err = executor.execute(tree.path(), "rename", Scope::All).unwrap_err();
    assert!(matches!(err, RenamerError::Aborted { applied: 1, .. }));
    assert!(tree.path().join("sub").join("renamed.txt").exists());

    let err = CliError::from(err);
    assert!(err.hint().unwrap().contains("--accept-partial"));
}
