//! Configuration command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Execute a config action.
pub fn execute_config(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", ctx.config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", ctx.config_path.display());
        }
        ConfigAction::Init { force } => {
            if ctx.config_path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists; use --force to overwrite",
                    ctx.config_path.display()
                )));
            }
            Config::default().save(&ctx.config_path)?;
            println!(
                "{}",
                ctx.formatter
                    .success(&format!("Wrote {}", ctx.config_path.display()))
            );
        }
    }
    Ok(())
}
