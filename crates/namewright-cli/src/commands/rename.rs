//! Rename command implementation.

use crate::cli::RenameArgs;
use crate::commands::plan::require_instruction;
use crate::config::OutputFormat;
use crate::context::Context;
use crate::error::Result;
use crate::output::Formatter;
use namewright_domain::{RenamePlan, Scope};
use namewright_renamer::ExecutionObserver;
use std::io::{self, Write};
use std::path::Path;

/// Prints each rename as it happens.
struct ProgressPrinter<'a> {
    formatter: &'a Formatter,
    enabled: bool,
    count: usize,
}

impl ExecutionObserver for ProgressPrinter<'_> {
    fn on_plan(&mut self, plan: &RenamePlan) {
        if self.enabled && !plan.is_empty() {
            println!("{}", self.formatter.info(&plan.directory.display().to_string()));
        }
    }

    fn on_rename(&mut self, from: &Path, to: &Path) {
        self.count += 1;
        if self.enabled {
            println!("{}", self.formatter.rename_line(&file_name(from), &file_name(to)));
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Execute the rename command.
pub fn execute_rename(args: RenameArgs, ctx: &Context) -> Result<()> {
    let instruction = require_instruction(&args.instruction)?;
    let scope: Scope = args.scope.into();

    // Confirm unless --yes is specified
    if !args.yes {
        print!(
            "Rename {} in {} using \"{}\"? [y/N] ",
            scope_label(scope),
            args.directory.display(),
            instruction
        );
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", ctx.formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let executor = ctx.executor(args.accept_partial, args.rollback)?;
    let mut progress = ProgressPrinter {
        formatter: &ctx.formatter,
        enabled: ctx.formatter.format() == OutputFormat::Table,
        count: 0,
    };

    let report = executor.execute_with_observer(&args.directory, instruction, scope, &mut progress)?;
    tracing::debug!("{} renames reported by observer", progress.count);

    let output = ctx.formatter.format_execution(&report)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Files => "all files",
        Scope::Folders => "all folders",
        Scope::All => "all files and folders",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/a/b/c.txt")), "c.txt");
        assert_eq!(file_name(Path::new("/")), "/");
    }

    #[test]
    fn test_progress_counts_renames() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut progress = ProgressPrinter {
            formatter: &formatter,
            enabled: false,
            count: 0,
        };
        progress.on_rename(Path::new("/d/a"), Path::new("/d/b"));
        progress.on_rename(Path::new("/d/c"), Path::new("/d/e"));
        assert_eq!(progress.count, 2);
    }
}
