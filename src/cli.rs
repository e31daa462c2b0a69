use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage git identities directly from the CLI
#[derive(Parser, Debug)]
#[command(name = "git-swap", version, arg_required_else_help = true)]
pub struct Cli {
    /// Profiles file to use instead of ~/.git-swap-config.json
    #[arg(long, global = true, env = "GIT_SWAP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Commands,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists all profiles
    List,
    /// Shows the identity of the current repository
    Status,
    /// Adds a new profile
    Add {
        /// Key of the new profile
        name: String,
    },
    /// Edits an existing profile
    Edit {
        /// Key of profile to edit
        name: String,
    },
    /// Deletes a profile
    #[command(visible_alias = "rm")]
    Remove {
        /// Key of profile to delete
        name: String,
    },
    /// Applies a profile to the current repository: `git-swap <name>`
    #[command(external_subcommand)]
    Swap(Vec<String>),
}

/// Arguments following an implicit profile name
///
/// Clap hands everything after an unknown subcommand over verbatim, so global
/// flags written after the name are parsed here.
#[derive(Parser, Debug)]
#[command(name = "git-swap", no_binary_name = true)]
struct SwapArgs {
    /// Key of profile to apply
    name: String,

    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Moves global flags trailing a profile name onto `self`
    ///
    /// Leaves `Commands::Swap` holding only the profile name; extra words are a usage error.
    pub fn fold_swap_flags(&mut self) -> Result<(), clap::Error> {
        let Commands::Swap(args) = &mut self.command else {
            return Ok(());
        };

        let trailing = SwapArgs::try_parse_from(args.iter())?;
        self.no_color |= trailing.no_color;
        self.verbose |= trailing.verbose;
        if trailing.config.is_some() {
            self.config = trailing.config;
        }
        *args = vec![trailing.name];
        Ok(())
    }
}
