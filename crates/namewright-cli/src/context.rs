//! Wiring between configuration and the library crates.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use namewright_domain::traits::RuleStore;
use namewright_llm::ConfiguredProvider;
use namewright_renamer::{BatchExecutor, LlmNameSuggester, RenamePlanner, RenamerConfig, RuleAssistant};
use namewright_store::{CredentialStore, JsonRuleStore};
use namewright_validator::{NamingValidator, ValidationConfig};
use std::path::PathBuf;
use tracing::debug;

/// Planner type used by the CLI.
pub type Planner = RenamePlanner<LlmNameSuggester<ConfiguredProvider>>;

/// Everything a command needs: configuration, output and collaborators.
pub struct Context {
    /// Effective configuration
    pub config: Config,
    /// Where the configuration was loaded from
    pub config_path: PathBuf,
    /// Output formatter
    pub formatter: Formatter,
    api_key: Option<String>,
}

impl Context {
    /// Create a context.
    ///
    /// `api_key` overrides the stored credential when set.
    pub fn new(config: Config, config_path: PathBuf, formatter: Formatter, api_key: Option<String>) -> Self {
        Self {
            config,
            config_path,
            formatter,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Open the rule store, installing the defaults if needed.
    pub fn rule_store(&self) -> Result<JsonRuleStore> {
        let mut store = JsonRuleStore::new(self.config.rules_path()?);
        store.load()?;
        Ok(store)
    }

    /// Open the credential store.
    pub fn credential_store(&self) -> Result<CredentialStore> {
        Ok(CredentialStore::new(self.config.credential_path()?))
    }

    /// Build the configured LLM provider.
    pub fn provider(&self) -> Result<ConfiguredProvider> {
        let key = match &self.api_key {
            Some(key) => Some(key.clone()),
            None if self.config.provider.requires_credential() => self.credential_store()?.load()?,
            None => None,
        };
        debug!("Using provider '{}'", self.config.provider.kind.as_str());
        Ok(self.config.provider.build(key)?)
    }

    /// Build a validator over the current rules with the configured checks.
    pub fn validator(&self) -> Result<NamingValidator> {
        self.validator_with(self.config.validator.clone())
    }

    /// Build a validator over the current rules with explicit checks.
    pub fn validator_with(&self, config: ValidationConfig) -> Result<NamingValidator> {
        let store = self.rule_store()?;
        Ok(NamingValidator::new(store.list().to_vec(), config))
    }

    /// Build a planner with the configured renamer settings.
    pub fn planner(&self) -> Result<Planner> {
        self.planner_with(self.config.renamer.clone())
    }

    /// Build a planner with explicit renamer settings.
    pub fn planner_with(&self, config: RenamerConfig) -> Result<Planner> {
        Ok(RenamePlanner::new(LlmNameSuggester::new(self.provider()?), config))
    }

    /// Build a batch executor, applying per-run overrides.
    pub fn executor(&self, accept_partial: bool, rollback: bool) -> Result<BatchExecutor<LlmNameSuggester<ConfiguredProvider>>> {
        let mut config = self.config.renamer.clone();
        config.accept_partial |= accept_partial;
        config.rollback_on_error |= rollback;
        Ok(BatchExecutor::new(self.planner_with(config)?))
    }

    /// Build the rule assistant.
    pub fn assistant(&self) -> Result<RuleAssistant<ConfiguredProvider>> {
        Ok(RuleAssistant::new(self.provider()?))
    }
}
