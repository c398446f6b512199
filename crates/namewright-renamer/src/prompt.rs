//! LLM prompts for name suggestion and rule generation

/// System instruction for rename and suggestion requests
pub const RENAME_SYSTEM_PROMPT: &str = "You are an assistant skilled at renaming files and folders.";

/// System instruction for rule generation
pub const RULE_SYSTEM_PROMPT: &str = "You are an expert in regular expressions. \
Reply with the regular expression only, without explanations or formatting.";

/// Request used to suggest a rename instruction
pub const SUGGEST_INSTRUCTION_PROMPT: &str =
    "Suggest an instruction for renaming a batch of files and folders. \
Reply with the instruction only.";

const OUTPUT_FORMAT_REMINDER: &str =
    "Please provide only the list of new names, one per line, without numbering or dashes.";

/// Builds the prompt asking for replacement names
pub struct RenamePromptBuilder<'a> {
    instruction: &'a str,
    names: &'a [String],
}

impl<'a> RenamePromptBuilder<'a> {
    /// Create a builder for the given instruction and names
    pub fn new(instruction: &'a str, names: &'a [String]) -> Self {
        Self { instruction, names }
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(self.instruction.trim());
        prompt.push_str("\n\nHere are the items to rename:\n");
        for name in self.names {
            prompt.push_str(&format!("- {}\n", name));
        }
        prompt.push('\n');
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

/// Prompt asking for a single pattern matching `description`
pub fn rule_prompt(description: &str) -> String {
    format!(
        "Generate a regular expression for the following description: {}. \
Names are tested from their first character. Reply with the expression only.",
        description.trim()
    )
}
