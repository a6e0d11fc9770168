use std::{path::Path, process::ExitCode};

use assetgen_rename::PassKind;
use clap::Args;
use eyre::Result;

use super::{exit_code, generate::GenerateCommand, load_config};
use crate::{
    ops::{self, rename::RenameOptions},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct RunCommand {
    /// Show what the passes would rename; nothing is renamed or generated
    #[arg(long)]
    pub dry_run: bool,

    /// Process asset directories one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Do not run the configured formatter on generated files
    #[arg(long)]
    pub no_format: bool,
}

impl RunCommand {
    /// Run clean, organize and generate in order
    pub fn run(&self, config_path: &Path) -> Result<ExitCode> {
        let config = load_config(config_path);
        let opts = RenameOptions {
            dry_run: self.dry_run,
            sequential: self.sequential,
        };
        let mut out = TerminalOutput::new();
        let mut outcomes = Vec::new();

        for kind in [PassKind::Clean, PassKind::Organize] {
            out.divider(kind.as_str());
            let report = ops::rename(&config, kind, &opts);
            report.render(&mut out);
            outcomes.push(report.outcome());
        }

        out.divider("generate");
        if self.dry_run {
            out.preformatted("Skipped in dry run: generated names would not match the files on disk.");
        } else {
            GenerateCommand {
                dry_run: false,
                no_format: self.no_format,
                output: None,
                framework: None,
            }
            .generate(&config, false)?;
        }

        Ok(exit_code(outcomes))
    }
}
