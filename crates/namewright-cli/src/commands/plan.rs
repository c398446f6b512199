//! Preview and plan command implementations.

use crate::cli::{PlanArgs, PreviewArgs};
use crate::context::Context;
use crate::error::{CliError, Result};

/// Execute the preview command.
pub fn execute_preview(args: PreviewArgs, ctx: &Context) -> Result<()> {
    let instruction = require_instruction(&args.instruction)?;
    let plan = ctx.planner()?.preview(&args.directory, instruction)?;
    println!("{}", ctx.formatter.format_plan(&plan)?);
    Ok(())
}

/// Execute the plan command.
pub fn execute_plan(args: PlanArgs, ctx: &Context) -> Result<()> {
    let instruction = require_instruction(&args.instruction)?;
    let plan = ctx
        .planner()?
        .plan(&args.directory, instruction, args.scope.into())?;
    println!("{}", ctx.formatter.format_plan(&plan)?);
    Ok(())
}

/// Reject blank instructions before anything is sent to the provider.
pub(crate) fn require_instruction(instruction: &str) -> Result<&str> {
    let trimmed = instruction.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("Rename instruction is empty".to_string()));
    }
    Ok(trimmed)
}
