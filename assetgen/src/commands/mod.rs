mod check;
mod completions;
mod generate;
mod init;
mod pass;
mod run;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use assetgen_config::{AssetgenToml, Config};
use assetgen_rename::{PassKind, PassOutcome};
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use pass::PassCommand;
use run::RunCommand;

/// Exit status when a pass finished but some files or directories failed.
const PARTIAL_FAILURE: u8 = 2;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for assetgen_config::Result<T> {
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

/// Open and validate the config file, exiting with a diagnostic on failure.
fn load_config(path: &Path) -> Config {
    AssetgenToml::open(path).unwrap_or_exit().into_config()
}

/// Exit status for a sequence of pass outcomes.
fn exit_status(outcomes: impl IntoIterator<Item = PassOutcome>) -> u8 {
    if outcomes
        .into_iter()
        .any(|o| o == PassOutcome::PartialSuccess)
    {
        PARTIAL_FAILURE
    } else {
        0
    }
}

fn exit_code(outcomes: impl IntoIterator<Item = PassOutcome>) -> ExitCode {
    ExitCode::from(exit_status(outcomes))
}

#[derive(Parser)]
#[command(name = "assetgen")]
#[command(version)]
#[command(about = "Keep asset filenames consistent and generate typed TypeScript bindings")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to assetgen.toml
    #[arg(short, long, global = true, default_value = "assetgen.toml")]
    pub config: PathBuf,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn run(&self) -> Result<ExitCode> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(&self.config),
            Commands::Check(cmd) => cmd.run(&self.config),
            Commands::Clean(cmd) => cmd.run(&self.config, PassKind::Clean),
            Commands::Organize(cmd) => cmd.run(&self.config, PassKind::Organize),
            Commands::Generate(cmd) => cmd.run(&self.config),
            Commands::Run(cmd) => cmd.run(&self.config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter assetgen.toml
    Init(InitCommand),

    /// Validate assetgen.toml and list asset directories
    Check(CheckCommand),

    /// Strip folder names baked into asset filenames
    Clean(PassCommand),

    /// Prefix asset filenames with their directory path
    Organize(PassCommand),

    /// Generate TypeScript bindings for all assets
    Generate(GenerateCommand),

    /// Clean, organize, then generate
    Run(RunCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
