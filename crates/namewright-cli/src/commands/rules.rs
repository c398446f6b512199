//! Rule management command implementation.

use crate::cli::{RulesAction, RulesArgs};
use crate::context::Context;
use crate::error::{CliError, Result};
use namewright_domain::traits::RuleStore;
use namewright_store::StoreError;

const RULES_HELP: &str = "\
Each rule is a description and a regular expression.

Every entry name is tested against every rule. A pattern must match
starting at the first character of the name; it only has to match the
whole name if it ends with $.

The built-in rule \"Must not start with a dot\" is not applied to files
that have an extension, since their names contain a dot anyway.

Independently of the rules, files without an extension and names longer
than 255 characters are reported.

Patterns are stored as typed; a pattern that does not compile is
reported by the next check.

Editing a rule moves it to the end of the list.";

/// Execute a rules action.
pub fn execute_rules(args: RulesArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.rule_store()?;
    let formatter = &ctx.formatter;

    match args.action {
        RulesAction::List => {
            println!("{}", formatter.format_rules(store.list())?);
        }
        RulesAction::Add { pattern, description } => {
            check_description(&description)?;
            store.add(&description, &pattern)?;
            println!("{}", formatter.success(&format!("Added rule {}: {}", store.len(), description)));
        }
        RulesAction::Edit {
            number,
            pattern,
            description,
        } => {
            let index = to_index(number)?;
            check_description(&description)?;
            store
                .update(index, &description, &pattern)
                .map_err(|e| not_found(e, number))?;
            println!("{}", formatter.success(&format!("Updated rule, now rule {}", store.len())));
        }
        RulesAction::Remove { number } => {
            let removed = store
                .remove(to_index(number)?)
                .map_err(|e| not_found(e, number))?;
            println!("{}", formatter.success(&format!("Removed rule: {}", removed)));
        }
        RulesAction::Generate { description } => {
            let rule = ctx.assistant()?.generate_rule(&description)?;
            store.add(&rule.description, &rule.pattern)?;
            println!("{}", formatter.success(&format!("Generated rule: {}", rule.pattern)));
        }
        RulesAction::Reset => {
            store.reset_to_defaults()?;
            println!("{}", formatter.success("Restored the built-in rules"));
        }
        RulesAction::Help => {
            println!("{}", RULES_HELP);
        }
    }

    Ok(())
}

/// Convert a one-based rule number to a store index.
fn to_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| CliError::InvalidInput("Rule numbers start at 1".to_string()))
}

/// Report a missing rule by the number the user typed.
fn not_found(error: StoreError, number: usize) -> CliError {
    match error {
        StoreError::NotFound(_) => CliError::InvalidInput(format!("There is no rule {}", number)),
        other => other.into(),
    }
}

/// Reject blank descriptions.
fn check_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(CliError::InvalidInput("Rule description is empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, OutputFormat};
    use crate::output::Formatter;
    use namewright_llm::ProviderKind;
    use tempfile::TempDir;

    #[test]
    fn test_to_index() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert!(to_index(0).is_err());
    }

    #[test]
    fn test_not_found_uses_rule_number() {
        let err = not_found(StoreError::NotFound(4), 5);
        assert_eq!(err.to_string(), "Invalid input: There is no rule 5");
    }

    #[test]
    fn test_check_description() {
        assert!(check_description("lowercase").is_ok());
        assert!(check_description("  ").is_err());
    }

    #[test]
    fn test_broken_pattern_stored_and_reported_by_check() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.provider.kind = ProviderKind::Mock;
        config.paths.rules_file = Some(dir.path().join("rules.json"));
        let ctx = Context::new(
            config,
            dir.path().join("config.toml"),
            Formatter::new(OutputFormat::Quiet, false),
            None,
        );

        let args = RulesArgs {
            action: RulesAction::Add {
                pattern: "[a-".to_string(),
                description: "broken".to_string(),
            },
        };
        execute_rules(args, &ctx).unwrap();
        assert_eq!(ctx.rule_store().unwrap().list()[3].pattern, "[a-");

        let tree = TempDir::new().unwrap();
        std::fs::write(tree.path().join("a.txt"), "").unwrap();
        let err = ctx
            .validator()
            .unwrap()
            .validate(tree.path(), namewright_domain::Scope::All)
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
