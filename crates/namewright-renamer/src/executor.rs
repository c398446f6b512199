//! Batch rename execution over a directory tree

use crate::error::{RenamerError, Result};
use crate::planner::RenamePlanner;
use namewright_domain::traits::{CollaboratorError, NameSuggester};
use namewright_domain::{RenamePlan, Scope};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Receives progress while a batch runs
///
/// All methods default to doing nothing.
pub trait ExecutionObserver {
    /// A level has been planned and is about to be applied
    fn on_plan(&mut self, _plan: &RenamePlan) {}

    /// An entry was renamed
    fn on_rename(&mut self, _from: &Path, _to: &Path) {}

    /// An entry already had its proposed name
    fn on_unchanged(&mut self, _path: &Path) {}
}

/// Observer that ignores every event
pub struct NoopObserver;

impl ExecutionObserver for NoopObserver {}

/// One applied rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    /// Path before the rename
    pub from: PathBuf,
    /// Path after the rename
    pub to: PathBuf,
}

/// Summary of a completed batch
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionReport {
    /// Applied renames in the order they happened
    pub renamed: Vec<RenameRecord>,

    /// Entries whose proposed name equalled their current name
    pub unchanged: usize,

    /// Directory levels visited
    pub levels: usize,

    /// Levels applied although the collaborator returned too few names
    pub partial_levels: usize,
}

/// Applies rename plans across a whole tree
///
/// Files are renamed top-down. Folder renames run bottom-up so a folder's
/// contents are handled before the folder itself moves.
pub struct BatchExecutor<S> {
    planner: RenamePlanner<S>,
}

impl<S> BatchExecutor<S>
where
    S: NameSuggester,
    S::Error: CollaboratorError,
{
    /// Create an executor around a planner
    pub fn new(planner: RenamePlanner<S>) -> Self {
        Self { planner }
    }

    /// The underlying planner
    pub fn planner(&self) -> &RenamePlanner<S> {
        &self.planner
    }

    /// Rename every in-scope entry below `root`
    pub fn execute(&self, root: &Path, instruction: &str, scope: Scope) -> Result<ExecutionReport> {
        self.execute_with_observer(root, instruction, scope, &mut NoopObserver)
    }

    /// Rename every in-scope entry below `root`, reporting progress to `observer`
    ///
    /// Not atomic: when a level fails, renames already applied stay in place
    /// unless `rollback_on_error` is set, in which case they are undone newest
    /// first. Either way the error reports how many had been applied.
    pub fn execute_with_observer(
        &self,
        root: &Path,
        instruction: &str,
        scope: Scope,
        observer: &mut dyn ExecutionObserver,
    ) -> Result<ExecutionReport> {
        if !root.is_dir() {
            return Err(RenamerError::NotADirectory(root.to_path_buf()));
        }
        self.planner.config().validate().map_err(RenamerError::Config)?;

        let levels = directories(root, scope.requires_bottom_up());
        info!(
            "Renaming in {} ({} levels, scope: {})",
            root.display(),
            levels.len(),
            scope
        );

        let mut report = ExecutionReport::default();
        for directory in &levels {
            if let Err(e) = self.apply_level(directory, instruction, scope, observer, &mut report) {
                return Err(self.abort(report, e));
            }
            report.levels += 1;
        }

        info!(
            "Rename complete: {} renamed, {} unchanged",
            report.renamed.len(),
            report.unchanged
        );
        Ok(report)
    }

    fn apply_level(
        &self,
        directory: &Path,
        instruction: &str,
        scope: Scope,
        observer: &mut dyn ExecutionObserver,
        report: &mut ExecutionReport,
    ) -> Result<()> {
        let plan = self.planner.plan(directory, instruction, scope)?;
        if plan.is_empty() && !plan.is_partial() {
            return Ok(());
        }

        if plan.is_partial() {
            if !self.planner.config().accept_partial {
                return Err(RenamerError::CountMismatch {
                    directory: directory.to_path_buf(),
                    requested: plan.requested,
                    received: plan.received,
                });
            }
            warn!("Applying partial plan for {}", directory.display());
            report.partial_levels += 1;
        }

        observer.on_plan(&plan);

        for entry in &plan.entries {
            let (from, to) = plan.paths_for(entry);
            if entry.is_noop() {
                observer.on_unchanged(&from);
                report.unchanged += 1;
                continue;
            }

            let name = entry.new_name_sanitized.as_str();
            if name.is_empty() || name == "." || name == ".." {
                return Err(RenamerError::InvalidName {
                    from,
                    name: name.to_string(),
                });
            }

            // Never overwrite; symlink_metadata also catches dangling links
            if fs::symlink_metadata(&to).is_ok() {
                return Err(RenamerError::Collision { from, to });
            }

            fs::rename(&from, &to).map_err(|e| RenamerError::io(&from, e))?;
            debug!("Renamed {} -> {}", from.display(), to.display());

            observer.on_rename(&from, &to);
            report.renamed.push(RenameRecord { from, to });
        }

        Ok(())
    }

    fn abort(&self, report: ExecutionReport, error: RenamerError) -> RenamerError {
        let applied = report.renamed.len();
        if applied == 0 {
            return error;
        }

        warn!("Batch failed after {} renames: {}", applied, error);

        let rolled_back = self.planner.config().rollback_on_error;
        if rolled_back {
            for record in report.renamed.iter().rev() {
                match fs::rename(&record.to, &record.from) {
                    Ok(()) => debug!("Restored {}", record.from.display()),
                    Err(e) => warn!(
                        "Failed to restore {} from {}: {}",
                        record.from.display(),
                        record.to.display(),
                        e
                    ),
                }
            }
            info!("Rolled back {} renames", applied);
        }

        RenamerError::Aborted {
            applied,
            rolled_back,
            source: Box::new(error),
        }
    }
}

/// Directories under `root` (root included) in processing order
///
/// Top-down lists parents before children; bottom-up lists children first.
/// The list is gathered before any rename happens.
fn directories(root: &Path, bottom_up: bool) -> Vec<PathBuf> {
    WalkDir::new(root)
        .contents_first(bottom_up)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a").join("deep")).unwrap();
        fs::create_dir(root.join("b")).unwrap();
        fs::write(root.join("file.txt"), "").unwrap();

        let top_down = directories(root, false);
        assert_eq!(
            top_down,
            vec![
                root.to_path_buf(),
                root.join("a"),
                root.join("a").join("deep"),
                root.join("b"),
            ]
        );

        let bottom_up = directories(root, true);
        assert_eq!(
            bottom_up,
            vec![
                root.join("a").join("deep"),
                root.join("a"),
                root.join("b"),
                root.to_path_buf(),
            ]
        );
    }
}
