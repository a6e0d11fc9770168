use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use assetgen_config::{Config, Framework};
use clap::Args;
use eyre::Result;

use super::load_config;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Do not run the configured formatter on generated files
    #[arg(long)]
    pub no_format: bool,

    /// Output directory (overrides file_generation.output_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target framework (overrides file_generation.framework)
    #[arg(short, long)]
    pub framework: Option<Framework>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, config_path: &Path) -> Result<ExitCode> {
        let config = load_config(config_path);
        self.generate(&config, self.dry_run)?;
        Ok(ExitCode::SUCCESS)
    }

    /// Generate and print the report for an already loaded config.
    pub fn generate(&self, config: &Config, dry_run: bool) -> Result<()> {
        let output_dir = self
            .output
            .as_ref()
            .unwrap_or(&config.file_generation.output_dir);

        let report = ops::generate(
            config,
            GenerateOptions {
                output_dir,
                framework: self
                    .framework
                    .unwrap_or(config.file_generation.framework),
                dry_run,
                format: !self.no_format,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
