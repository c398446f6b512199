//! Check command implementation.

use crate::cli::CheckArgs;
use crate::context::Context;
use crate::error::Result;
use namewright_validator::ValidationConfig;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, ctx: &Context) -> Result<()> {
    let validator = if args.rules_only {
        ctx.validator_with(ValidationConfig::rules_only())?
    } else {
        ctx.validator()?
    };
    let report = validator.validate_report(&args.directory, args.scope.into())?;

    let output = ctx.formatter.format_report(&report)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
