//! Name suggestion collaborator backed by an LLM provider

use crate::parser::parse_name_list;
use crate::prompt::{RenamePromptBuilder, RENAME_SYSTEM_PROMPT};
use namewright_domain::traits::{LlmProvider, NameSuggester};
use tracing::debug;

/// Asks an LLM for replacement names
pub struct LlmNameSuggester<L> {
    llm: L,
}

impl<L: LlmProvider> LlmNameSuggester<L> {
    /// Wrap a provider
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// The wrapped provider
    pub fn provider(&self) -> &L {
        &self.llm
    }
}

impl<L: LlmProvider> NameSuggester for LlmNameSuggester<L> {
    type Error = L::Error;

    fn suggest_names(&self, instruction: &str, names: &[String]) -> Result<Vec<String>, Self::Error> {
        let prompt = RenamePromptBuilder::new(instruction, names).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = self.llm.generate_with_system(RENAME_SYSTEM_PROMPT, &prompt)?;
        debug!("LLM response length: {} chars", response.len());

        Ok(parse_name_list(&response))
    }
}
