//! Namewright Renamer
//!
//! Plans and applies LLM-proposed renames.
//!
//! # Overview
//!
//! A rename instruction ("prefix with the shoot date", "translate to
//! English") is sent together with the names of one directory level to a
//! name suggestion collaborator. The answers are sanitized and paired with
//! the originals by position to form a [`RenamePlan`](namewright_domain::RenamePlan).
//!
//! # Architecture
//!
//! ```text
//! Directory level → RenamePlanner → NameSuggester → LLM → RenamePlan → BatchExecutor → fs::rename
//! ```
//!
//! # Key Features
//!
//! - **Preview**: plan a handful of top-level entries without renaming anything
//! - **Scoped batches**: files top-down, folders bottom-up
//! - **Safe renames**: never overwrites, refuses partial plans unless asked
//! - **Optional rollback**: undo applied renames when a batch fails
//! - **Rule assistant**: generate rule patterns from plain descriptions
//!
//! # Example Usage
//!
//! ```no_run
//! use namewright_domain::Scope;
//! use namewright_llm::MockProvider;
//! use namewright_renamer::{BatchExecutor, LlmNameSuggester, RenamePlanner, RenamerConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("holiday_001.jpg\nholiday_002.jpg");
//! let planner = RenamePlanner::new(LlmNameSuggester::new(llm), RenamerConfig::default());
//!
//! let preview = planner.preview(Path::new("/photos"), "Prefix with holiday_")?;
//! for entry in &preview.entries {
//!     println!("{} -> {}", entry.old_name, entry.new_name_sanitized);
//! }
//!
//! let report = BatchExecutor::new(planner).execute(
//!     Path::new("/photos"),
//!     "Prefix with holiday_",
//!     Scope::Files,
//! )?;
//! println!("Renamed {} entries", report.renamed.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assist;
mod config;
mod error;
mod executor;
mod parser;
mod planner;
mod prompt;
mod suggester;

pub use assist::RuleAssistant;
pub use config::RenamerConfig;
pub use error::{RenamerError, Result};
pub use executor::{BatchExecutor, ExecutionObserver, ExecutionReport, NoopObserver, RenameRecord};
pub use parser::{parse_name_list, parse_pattern};
pub use planner::{level_entries, RenamePlanner};
pub use suggester::LlmNameSuggester;
