use std::{path::Path, process::ExitCode};

use clap::Args;
use eyre::Result;

use super::load_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, config_path: &Path) -> Result<ExitCode> {
        let config = load_config(config_path);
        let report = ops::check(&config, config_path);

        report.render(&mut TerminalOutput::new());
        Ok(ExitCode::SUCCESS)
    }
}
