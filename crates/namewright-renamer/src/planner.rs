//! Rename planning for a single directory level

use crate::config::RenamerConfig;
use crate::error::{RenamerError, Result};
use namewright_domain::traits::{CollaboratorError, NameSuggester};
use namewright_domain::{RenamePlan, Scope};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Builds rename plans by asking a [`NameSuggester`] for new names
pub struct RenamePlanner<S> {
    suggester: S,
    config: RenamerConfig,
}

impl<S> RenamePlanner<S>
where
    S: NameSuggester,
    S::Error: CollaboratorError,
{
    /// Create a new planner
    pub fn new(suggester: S, config: RenamerConfig) -> Self {
        Self { suggester, config }
    }

    /// Create a planner with default configuration
    pub fn default_config(suggester: S) -> Self {
        Self::new(suggester, RenamerConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &RenamerConfig {
        &self.config
    }

    /// Plan renames for the in-scope entries directly inside `directory`
    ///
    /// The collaborator is called once with the entry names in name order and
    /// its answers are paired by position. A directory with nothing in scope
    /// yields an empty plan without calling the collaborator.
    pub fn plan(&self, directory: &Path, instruction: &str, scope: Scope) -> Result<RenamePlan> {
        let names = level_entries(directory, scope)?;
        self.plan_names(directory, instruction, names)
    }

    /// Plan renames for the first few top-level entries, whatever their kind
    ///
    /// Never touches the filesystem beyond listing `directory`.
    pub fn preview(&self, directory: &Path, instruction: &str) -> Result<RenamePlan> {
        let mut names = level_entries(directory, Scope::All)?;
        names.truncate(self.config.preview_limit);
        info!("Previewing {} entries in {}", names.len(), directory.display());
        self.plan_names(directory, instruction, names)
    }

    fn plan_names(&self, directory: &Path, instruction: &str, names: Vec<String>) -> Result<RenamePlan> {
        if names.is_empty() {
            debug!("Nothing to plan in {}", directory.display());
            return Ok(RenamePlan::empty(directory));
        }

        let proposed = self
            .suggester
            .suggest_names(instruction, &names)
            .map_err(RenamerError::collaborator)?;

        let plan = RenamePlan::pair(directory, &names, &proposed);
        if plan.is_partial() {
            warn!(
                "Collaborator returned {} names for {} entries in {}",
                plan.received,
                plan.requested,
                directory.display()
            );
        } else if plan.received > plan.requested {
            debug!("Ignoring {} extra names", plan.received - plan.requested);
        }

        Ok(plan)
    }
}

/// Names of the entries directly inside `directory` that fall in `scope`, sorted
///
/// Names that are not valid UTF-8 cannot be sent to the collaborator or
/// joined back into a path, so they are left out with a warning.
pub fn level_entries(directory: &Path, scope: Scope) -> Result<Vec<String>> {
    if !directory.is_dir() {
        return Err(RenamerError::NotADirectory(directory.to_path_buf()));
    }

    let reader = fs::read_dir(directory).map_err(|e| RenamerError::io(directory, e))?;
    let mut names = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|e| RenamerError::io(directory, e))?;
        if !scope.includes(entry.path().is_dir()) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 name {:?} in {}", raw, directory.display()),
        }
    }
    names.sort();

    Ok(names)
}
