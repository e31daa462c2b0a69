mod applier;
mod cli;
mod commands;
mod editor;
mod error;
mod git;
mod inspector;
mod profile;
mod prompt;
mod storage;
mod validation;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Commands},
    error::AppError,
    git::GitCli,
    prompt::stdin_input,
    storage::Storage,
};

// Main
fn main() -> ExitCode {
    let mut cli = Cli::parse();
    if let Err(err) = cli.fold_swap_flags() {
        err.exit();
    }

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err.to_string().red());
            if let Some(hint) = err.hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let storage = Storage::new(cli.config)?;
    let git = GitCli::new();

    match cli.command {
        Commands::List => commands::list_profiles(&storage),
        Commands::Status => commands::show_status(&storage, &git),
        Commands::Add { name } => commands::add(&storage, &name, stdin_input().as_mut()),
        Commands::Edit { name } => commands::edit(&storage, &name, stdin_input().as_mut()),
        Commands::Remove { name } => commands::remove(&storage, &name),
        Commands::Swap(args) => match args.as_slice() {
            [name] => commands::swap(&storage, name, &git),
            _ => Err(AppError::Usage(
                "expected a single profile name: git-swap <name>".to_string(),
            )),
        },
    }
}
