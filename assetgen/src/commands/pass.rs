use std::{path::Path, process::ExitCode};

use assetgen_rename::PassKind;
use clap::Args;
use eyre::Result;

use super::{exit_code, load_config};
use crate::{
    ops::{self, rename::RenameOptions},
    reports::{Report, TerminalOutput},
};

/// Arguments shared by the clean and organize commands.
#[derive(Args)]
pub struct PassCommand {
    /// Show what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Process asset directories one at a time
    #[arg(long)]
    pub sequential: bool,
}

impl PassCommand {
    pub fn options(&self) -> RenameOptions {
        RenameOptions {
            dry_run: self.dry_run,
            sequential: self.sequential,
        }
    }

    pub fn run(&self, config_path: &Path, kind: PassKind) -> Result<ExitCode> {
        let config = load_config(config_path);
        let report = ops::rename(&config, kind, &self.options());

        report.render(&mut TerminalOutput::new());
        Ok(exit_code([report.outcome()]))
    }
}
