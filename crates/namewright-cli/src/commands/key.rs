//! Credential command implementation.

use crate::cli::{KeyAction, KeyArgs};
use crate::context::Context;
use crate::error::Result;

/// Execute a key action.
pub fn execute_key(args: KeyArgs, ctx: &Context) -> Result<()> {
    let store = ctx.credential_store()?;
    let formatter = &ctx.formatter;

    match args.action {
        KeyAction::Set { token } => {
            store.save(&token)?;
            println!("{}", formatter.success(&format!("API key saved to {}", store.path().display())));
        }
        KeyAction::Show => match store.load()? {
            Some(token) => println!("{}", mask(&token)),
            None => println!("{}", formatter.warning("No API key stored")),
        },
        KeyAction::Clear => {
            if store.clear()? {
                println!("{}", formatter.success("API key removed"));
            } else {
                println!("{}", formatter.info("No API key stored"));
            }
        }
    }

    Ok(())
}

/// Show only the first and last few characters of a token.
fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("sk-abcdefghijkl"), "sk-a…ijkl");
        assert_eq!(mask("short"), "*****");
    }
}
