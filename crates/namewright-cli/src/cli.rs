//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use namewright_domain::Scope;
use std::path::PathBuf;

/// Namewright - check names against rules and rename files with an LLM.
#[derive(Debug, Parser)]
#[command(name = "namewright")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API key, overriding the stored credential
    #[arg(long, env = "NAMEWRIGHT_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// Which entries an operation applies to.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ScopeArg {
    /// Regular files only
    Files,
    /// Folders only
    Folders,
    /// Files and folders
    #[default]
    All,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check entry names against the rules
    Check(CheckArgs),

    /// Preview renames for the first few entries of a directory
    Preview(PreviewArgs),

    /// Show the rename plan for the top level of a directory
    Plan(PlanArgs),

    /// Rename entries throughout a directory tree
    Rename(RenameArgs),

    /// Suggest a rename instruction
    Suggest,

    /// Manage naming rules
    Rules(RulesArgs),

    /// Manage the stored API key
    Key(KeyArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Enter the interactive shell
    Shell,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Directory to check
    pub directory: PathBuf,

    /// Entries to check
    #[arg(short, long, value_enum, default_value = "all")]
    pub scope: ScopeArg,

    /// Apply only the rules, skipping the extension and length checks
    #[arg(long)]
    pub rules_only: bool,
}

/// Arguments for the preview command.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// Directory to preview
    pub directory: PathBuf,

    /// Rename instruction
    pub instruction: String,
}

/// Arguments for the plan command.
#[derive(Debug, Parser)]
pub struct PlanArgs {
    /// Directory to plan
    pub directory: PathBuf,

    /// Rename instruction
    pub instruction: String,

    /// Entries to rename
    #[arg(short, long, value_enum, default_value = "all")]
    pub scope: ScopeArg,
}

/// Arguments for the rename command.
#[derive(Debug, Parser)]
pub struct RenameArgs {
    /// Root directory
    pub directory: PathBuf,

    /// Rename instruction
    pub instruction: String,

    /// Entries to rename
    #[arg(short, long, value_enum, default_value = "all")]
    pub scope: ScopeArg,

    /// Apply plans even when the LLM returned fewer names than requested
    #[arg(long)]
    pub accept_partial: bool,

    /// Undo applied renames if the batch fails
    #[arg(long)]
    pub rollback: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for rule management.
#[derive(Debug, Parser)]
#[command(disable_help_subcommand = true)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub action: RulesAction,
}

/// Rule management actions.
///
/// Rule numbers are one-based, as shown by `rules list`.
#[derive(Debug, Subcommand)]
pub enum RulesAction {
    /// List all rules
    List,

    /// Add a rule
    Add {
        /// Regular expression, matched from the first character of the name
        pattern: String,
        /// What the rule enforces
        description: String,
    },

    /// Replace a rule (the edited rule moves to the end)
    Edit {
        /// Rule number
        number: usize,
        /// New regular expression
        pattern: String,
        /// New description
        description: String,
    },

    /// Remove a rule
    Remove {
        /// Rule number
        number: usize,
    },

    /// Generate a rule from a description and add it
    Generate {
        /// What the rule should enforce
        description: String,
    },

    /// Restore the built-in rules
    Reset,

    /// Explain how rules are applied
    Help,
}

/// Arguments for credential management.
#[derive(Debug, Parser)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub action: KeyAction,
}

/// Credential actions.
#[derive(Debug, Subcommand)]
pub enum KeyAction {
    /// Store an API key
    Set {
        /// The key
        token: String,
    },

    /// Show whether a key is stored (masked)
    Show,

    /// Delete the stored key
    Clear,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ScopeArg> for Scope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Files => Scope::Files,
            ScopeArg::Folders => Scope::Folders,
            ScopeArg::All => Scope::All,
        }
    }
}
