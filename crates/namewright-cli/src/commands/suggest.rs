//! Suggest command implementation.

use crate::context::Context;
use crate::error::Result;

/// Execute the suggest command.
pub fn execute_suggest(ctx: &Context) -> Result<String> {
    let suggestion = ctx.assistant()?.suggest_instruction()?;
    println!("{}", suggestion);
    Ok(suggestion)
}
