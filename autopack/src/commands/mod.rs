mod check;
mod clean;
mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use autopack_config::{AutopackToml, CONFIG_FILE};
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for autopack_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for autopack_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "autopack")]
#[command(version)]
#[command(about = "Generate component registration packs and a server bundle")]
pub(crate) struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate component packs and the server bundle
    Generate(GenerateCommand),

    /// Validate components and report whether packs are up to date
    Check(CheckCommand),

    /// List discovered components by category
    List(ListCommand),

    /// Remove generated packs and the generated server bundle
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Config file and project root, shared by every project command.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to autopack.toml (defaults to ./autopack.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Project root (defaults to the directory holding the config file)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl ProjectArgs {
    /// Open the config file, exiting with a diagnostic when it is invalid.
    pub fn open(&self) -> (AutopackToml, PathBuf) {
        let autopack_toml = AutopackToml::open(&self.config).unwrap_or_exit();
        let root = self.root.clone().unwrap_or_else(|| autopack_toml.root());
        (autopack_toml, root)
    }
}
