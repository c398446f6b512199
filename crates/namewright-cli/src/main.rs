//! Namewright CLI - rule-based name checking and LLM-assisted batch renaming.

use clap::Parser;
use namewright_cli::commands;
use namewright_cli::repl;
use namewright_cli::{Cli, Command, Config, Context, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG overrides the verbosity flags.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> namewright_cli::Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let config = Config::load(Some(&config_path))?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let ctx = Context::new(config, config_path, formatter, cli.api_key);

    match cli.command {
        None | Some(Command::Shell) => repl::run_repl(&ctx),
        Some(Command::Check(args)) => commands::execute_check(args, &ctx),
        Some(Command::Preview(args)) => commands::execute_preview(args, &ctx),
        Some(Command::Plan(args)) => commands::execute_plan(args, &ctx),
        Some(Command::Rename(args)) => commands::execute_rename(args, &ctx),
        Some(Command::Suggest) => commands::execute_suggest(&ctx).map(|_| ()),
        Some(Command::Rules(args)) => commands::execute_rules(args, &ctx),
        Some(Command::Key(args)) => commands::execute_key(args, &ctx),
        Some(Command::Config(args)) => commands::execute_config(args, &ctx),
    }
}
