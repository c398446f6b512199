//! Interactive shell mode.

use crate::cli::{
    CheckArgs, Command, KeyAction, KeyArgs, PlanArgs, PreviewArgs, RenameArgs, RulesAction, RulesArgs,
    ScopeArg,
};
use crate::commands;
use crate::context::Context;
use crate::error::{CliError, Result};
use namewright_domain::Scope;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::{Path, PathBuf};

/// Shell state carried between commands.
struct ShellState {
    directory: PathBuf,
    scope: Scope,
    last_suggestion: Option<String>,
}

/// Run the interactive shell.
pub fn run_repl(ctx: &Context) -> Result<()> {
    let formatter = &ctx.formatter;
    println!("{}", formatter.info("Namewright shell - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = EditorConfig::builder()
        .max_history_size(ctx.config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut state = ShellState {
        directory: std::env::current_dir()?,
        scope: Scope::All,
        last_suggestion: None,
    };

    loop {
        let prompt = format!("namewright [{} | {}]> ", state.directory.display(), state.scope);

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line, &state) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(ctx);
                    }
                    Ok(ReplCommand::Cd(target)) => match change_directory(&state.directory, &target) {
                        Ok(dir) => state.directory = dir,
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Ok(ReplCommand::Pwd) => {
                        println!("{}", state.directory.display());
                    }
                    Ok(ReplCommand::SetScope(scope)) => {
                        state.scope = scope;
                        println!("{}", formatter.info(&format!("Scope set to {}", scope)));
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, ctx, &mut state) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                            if let Some(hint) = e.hint() {
                                eprintln!("{}", formatter.info(hint));
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// Shell command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Cd(String),
    Pwd,
    SetScope(Scope),
    Command(Command),
}

/// Parse a shell command line.
fn parse_repl_command(line: &str, state: &ShellState) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "cd" => Ok(ReplCommand::Cd(if rest.is_empty() { "~".to_string() } else { rest.to_string() })),
        "pwd" => Ok(ReplCommand::Pwd),
        "scope" => parse_scope_command(rest, state),
        "check" => Ok(ReplCommand::Command(Command::Check(CheckArgs {
            directory: state.directory.clone(),
            scope: scope_arg(state.scope),
            rules_only: rest == "--rules-only",
        }))),
        "preview" => Ok(ReplCommand::Command(Command::Preview(PreviewArgs {
            directory: state.directory.clone(),
            instruction: instruction_or_last(rest, state, "preview")?,
        }))),
        "plan" => Ok(ReplCommand::Command(Command::Plan(PlanArgs {
            directory: state.directory.clone(),
            instruction: instruction_or_last(rest, state, "plan")?,
            scope: scope_arg(state.scope),
        }))),
        "rename" => Ok(ReplCommand::Command(Command::Rename(RenameArgs {
            directory: state.directory.clone(),
            instruction: instruction_or_last(rest, state, "rename")?,
            scope: scope_arg(state.scope),
            accept_partial: false,
            rollback: false,
            yes: false,
        }))),
        "suggest" => Ok(ReplCommand::Command(Command::Suggest)),
        "rules" => parse_rules_command(rest),
        "key" => parse_key_command(rest),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

/// Execute a shell command.
fn execute_repl_command(cmd: Command, ctx: &Context, state: &mut ShellState) -> Result<()> {
    match cmd {
        Command::Check(args) => commands::execute_check(args, ctx),
        Command::Preview(args) => commands::execute_preview(args, ctx),
        Command::Plan(args) => commands::execute_plan(args, ctx),
        Command::Rename(args) => commands::execute_rename(args, ctx),
        Command::Suggest => {
            state.last_suggestion = Some(commands::execute_suggest(ctx)?);
            println!(
                "{}",
                ctx.formatter
                    .info("Use 'preview', 'plan' or 'rename' without an instruction to apply it")
            );
            Ok(())
        }
        Command::Rules(args) => commands::execute_rules(args, ctx),
        Command::Key(args) => commands::execute_key(args, ctx),
        Command::Config(args) => commands::execute_config(args, ctx),
        Command::Shell => Err(CliError::InvalidInput("Already in the shell".to_string())),
    }
}

// Simple command parsers for the shell (minimal argument parsing)

fn parse_scope_command(rest: &str, state: &ShellState) -> Result<ReplCommand> {
    if rest.is_empty() {
        return Ok(ReplCommand::SetScope(state.scope));
    }
    Scope::parse(rest)
        .map(ReplCommand::SetScope)
        .ok_or_else(|| CliError::InvalidInput("Usage: scope [files|folders|all]".to_string()))
}

fn instruction_or_last(rest: &str, state: &ShellState, command: &str) -> Result<String> {
    if !rest.is_empty() {
        return Ok(rest.to_string());
    }
    state
        .last_suggestion
        .clone()
        .ok_or_else(|| CliError::InvalidInput(format!("Usage: {} <instruction>", command)))
}

fn parse_rules_command(rest: &str) -> Result<ReplCommand> {
    let (action, args) = match rest.split_once(char::is_whitespace) {
        Some((action, args)) => (action, args.trim()),
        None => (rest, ""),
    };

    let action = match action {
        "" | "list" => RulesAction::List,
        "add" => {
            let (pattern, description) = split_first(args)
                .ok_or_else(|| CliError::InvalidInput("Usage: rules add <pattern> <description>".to_string()))?;
            RulesAction::Add { pattern, description }
        }
        "edit" => {
            let usage = || CliError::InvalidInput("Usage: rules edit <n> <pattern> <description>".to_string());
            let (number, remainder) = split_first(args).ok_or_else(usage)?;
            let number = number.parse().map_err(|_| usage())?;
            let (pattern, description) = split_first(&remainder).ok_or_else(usage)?;
            RulesAction::Edit {
                number,
                pattern,
                description,
            }
        }
        "remove" => {
            let number = args
                .parse()
                .map_err(|_| CliError::InvalidInput("Usage: rules remove <n>".to_string()))?;
            RulesAction::Remove { number }
        }
        "generate" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: rules generate <description>".to_string()));
            }
            RulesAction::Generate {
                description: args.to_string(),
            }
        }
        "reset" => RulesAction::Reset,
        "help" => RulesAction::Help,
        _ => return Err(CliError::InvalidInput(format!("Unknown rules action: {}", action))),
    };

    Ok(ReplCommand::Command(Command::Rules(RulesArgs { action })))
}

fn parse_key_command(rest: &str) -> Result<ReplCommand> {
    let (action, args) = match rest.split_once(char::is_whitespace) {
        Some((action, args)) => (action, args.trim()),
        None => (rest, ""),
    };

    let action = match action {
        "" | "show" => KeyAction::Show,
        "clear" => KeyAction::Clear,
        "set" if !args.is_empty() => KeyAction::Set {
            token: args.to_string(),
        },
        "set" => return Err(CliError::InvalidInput("Usage: key set <token>".to_string())),
        _ => return Err(CliError::InvalidInput(format!("Unknown key action: {}", action))),
    };

    Ok(ReplCommand::Command(Command::Key(KeyArgs { action })))
}

/// Split off the first whitespace-separated word; the remainder must be non-empty.
fn split_first(args: &str) -> Option<(String, String)> {
    let (first, remainder) = args.split_once(char::is_whitespace)?;
    let remainder = remainder.trim();
    if remainder.is_empty() {
        return None;
    }
    Some((first.to_string(), remainder.to_string()))
}

fn scope_arg(scope: Scope) -> ScopeArg {
    match scope {
        Scope::Files => ScopeArg::Files,
        Scope::Folders => ScopeArg::Folders,
        Scope::All => ScopeArg::All,
    }
}

fn change_directory(current: &Path, target: &str) -> Result<PathBuf> {
    let path = if target == "~" {
        dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?
    } else if let Some(rest) = target.strip_prefix("~/") {
        dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?
            .join(rest)
    } else {
        current.join(target)
    };

    if !path.is_dir() {
        return Err(CliError::InvalidInput(format!("Not a directory: {}", path.display())));
    }
    Ok(path.canonicalize()?)
}

fn get_history_path() -> Result<PathBuf> {
    let dir = crate::Config::data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(ctx: &Context) {
    println!("{}", ctx.formatter.info("Available commands:"));
    println!();
    println!("  cd <dir>                          - Change the working directory");
    println!("  pwd                               - Show the working directory");
    println!("  scope [files|folders|all]         - Show or set the scope");
    println!("  check [--rules-only]              - Check names against the rules");
    println!("  preview [instruction]             - Preview renames for the first {} entries", ctx.config.renamer.preview_limit);
    println!("  plan [instruction]                - Show the plan for the top level");
    println!("  rename [instruction]              - Rename throughout the directory tree");
    println!("  suggest                           - Suggest an instruction");
    println!("  rules [list]                      - List rules");
    println!("  rules add <pattern> <description> - Add a rule");
    println!("  rules edit <n> <pattern> <desc>   - Replace rule n (moves it to the end)");
    println!("  rules remove <n>                  - Remove rule n");
    println!("  rules generate <description>      - Generate a rule with the LLM");
    println!("  rules reset                       - Restore the built-in rules");
    println!("  key [show|set <token>|clear]      - Manage the API key");
    println!("  help, ?                           - Show this help");
    println!("  exit, quit, q                     - Exit the shell");
    println!();
    println!("  Without an instruction, preview/plan/rename use the last suggestion.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ShellState {
        ShellState {
            directory: PathBuf::from("/photos"),
            scope: Scope::Files,
            last_suggestion: None,
        }
    }

    #[test]
    fn test_parse_check_rules_only() {
        match parse_repl_command("check --rules-only", &state()).unwrap() {
            ReplCommand::Command(Command::Check(args)) => assert!(args.rules_only),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rename_uses_state() {
        match parse_repl_command("rename add the year as prefix", &state()).unwrap() {
            ReplCommand::Command(Command::Rename(args)) => {
                assert_eq!(args.directory, PathBuf::from("/photos"));
                assert_eq!(args.instruction, "add the year as prefix");
                assert_eq!(Scope::from(args.scope), Scope::Files);
                assert!(!args.yes);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_instruction_falls_back_to_suggestion() {
        let mut s = state();
        assert!(parse_repl_command("preview", &s).is_err());

        s.last_suggestion = Some("lowercase everything".into());
        match parse_repl_command("preview", &s).unwrap() {
            ReplCommand::Command(Command::Preview(args)) => {
                assert_eq!(args.instruction, "lowercase everything");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rules_add_keeps_description_words() {
        match parse_repl_command("rules add ^[a-z]+$ only lowercase letters", &state()).unwrap() {
            ReplCommand::Command(Command::Rules(RulesArgs {
                action: RulesAction::Add { pattern, description },
            })) => {
                assert_eq!(pattern, "^[a-z]+$");
                assert_eq!(description, "only lowercase letters");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rules_edit() {
        match parse_repl_command("rules edit 2 ^x no x", &state()).unwrap() {
            ReplCommand::Command(Command::Rules(RulesArgs {
                action: RulesAction::Edit { number, pattern, description },
            })) => {
                assert_eq!(number, 2);
                assert_eq!(pattern, "^x");
                assert_eq!(description, "no x");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(parse_repl_command("rules edit two ^x desc", &state()).is_err());
    }

    #[test]
    fn test_parse_scope() {
        assert!(matches!(
            parse_repl_command("scope folders", &state()).unwrap(),
            ReplCommand::SetScope(Scope::Folders)
        ));
        assert!(parse_repl_command("scope everything", &state()).is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_repl_command("frobnicate", &state()).is_err());
    }

    #[test]
    fn test_change_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let changed = change_directory(dir.path(), "sub").unwrap();
        assert!(changed.ends_with("sub"));
        assert!(change_directory(dir.path(), "missing").is_err());
    }
}
