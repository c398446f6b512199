//! LLM help for writing rules and rename instructions

use crate::error::{RenamerError, Result};
use crate::parser::parse_pattern;
use crate::prompt::{rule_prompt, RENAME_SYSTEM_PROMPT, RULE_SYSTEM_PROMPT, SUGGEST_INSTRUCTION_PROMPT};
use namewright_domain::traits::{CollaboratorError, LlmProvider};
use namewright_domain::Rule;
use regex::Regex;
use tracing::info;

/// Generates rule patterns and rename instructions
pub struct RuleAssistant<L> {
    llm: L,
}

impl<L> RuleAssistant<L>
where
    L: LlmProvider,
    L::Error: CollaboratorError,
{
    /// Wrap a provider
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Ask for a pattern matching `description`
    ///
    /// The returned rule keeps the caller's description. It is not stored;
    /// adding it to a rule store is up to the caller.
    pub fn generate_rule(&self, description: &str) -> Result<Rule> {
        let description = description.trim();
        if description.is_empty() {
            return Err(RenamerError::Config("rule description is empty".to_string()));
        }

        let response = self
            .llm
            .generate_with_system(RULE_SYSTEM_PROMPT, &rule_prompt(description))
            .map_err(RenamerError::collaborator)?;

        let pattern = parse_pattern(&response);
        if pattern.is_empty() {
            return Err(RenamerError::InvalidPattern {
                pattern,
                reason: "empty response".to_string(),
            });
        }
        Regex::new(&pattern).map_err(|e| RenamerError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        info!("Generated pattern {} for '{}'", pattern, description);
        Ok(Rule::new(description, pattern))
    }

    /// Ask for an example rename instruction
    pub fn suggest_instruction(&self) -> Result<String> {
        let response = self
            .llm
            .generate_with_system(RENAME_SYSTEM_PROMPT, SUGGEST_INSTRUCTION_PROMPT)
            .map_err(RenamerError::collaborator)?;
        Ok(response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namewright_llm::{LlmError, MockProvider};

    #[test]
    fn test_generate_rule_strips_formatting() {
        let llm = MockProvider::new("```\n^[a-z_]+$\n```");
        let assistant = RuleAssistant::new(llm.clone());

        let rule = assistant.generate_rule("lowercase and underscores").unwrap();

        assert_eq!(rule.description, "lowercase and underscores");
        assert_eq!(rule.pattern, "^[a-z_]+$");
        assert!(llm.prompts()[0].starts_with(RULE_SYSTEM_PROMPT));
    }

    #[test]
    fn test_generate_rule_rejects_invalid_pattern() {
        let assistant = RuleAssistant::new(MockProvider::new("`[a-z`"));

        let err = assistant.generate_rule("broken").unwrap_err();
        assert!(matches!(err, RenamerError::InvalidPattern { ref pattern, .. } if pattern == "[a-z"));
    }

    #[test]
    fn test_generate_rule_empty_description() {
        let llm = MockProvider::new("^x$");
        let assistant = RuleAssistant::new(llm.clone());

        assert!(assistant.generate_rule("   ").is_err());
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_suggest_instruction_trims() {
        let assistant = RuleAssistant::new(MockProvider::new("  Prefix every name with the year\n"));
        assert_eq!(
            assistant.suggest_instruction().unwrap(),
            "Prefix every name with the year"
        );
    }

    #[test]
    fn test_provider_failure_is_collaborator_error() {
        let llm = MockProvider::default();
        llm.push_error("offline");
        let assistant = RuleAssistant::new(llm);

        assert!(matches!(
            assistant.suggest_instruction(),
            Err(RenamerError::Collaborator { configuration: false, .. })
        ));
    }

    #[test]
    fn test_rejected_credential_is_configuration_error() {
        let llm = MockProvider::default();
        llm.push_failure(LlmError::Unauthorized("HTTP 401".into()));
        let assistant = RuleAssistant::new(llm);

        let err = assistant.generate_rule("lowercase").unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(
            err.collaborator_source::<LlmError>(),
            Some(LlmError::Unauthorized(_))
        ));
    }
}
