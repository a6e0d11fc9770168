use std::{
    io::{self, IsTerminal},
    path::Path,
    process::ExitCode,
};

use assetgen_config::{Framework, template};
use assetgen_core::{File, FileRules, WriteResult};
use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result, bail};

#[derive(Args)]
pub struct InitCommand {
    /// Target framework for generated bindings (prompted when omitted)
    #[arg(short, long)]
    pub framework: Option<Framework>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self, config_path: &Path) -> Result<ExitCode> {
        let framework = match self.framework {
            Some(framework) => framework,
            None if io::stdin().is_terminal() => Self::prompt_framework()?,
            None => Framework::default(),
        };

        let rules = if self.force {
            FileRules::default()
        } else {
            FileRules::create_once()
        };
        let result = File::new(config_path, template(framework))
            .with_rules(rules)
            .write()?;

        if result == WriteResult::Skipped {
            bail!(
                "{} already exists (use --force to overwrite it)",
                config_path.display()
            );
        }

        println!("Created {} ({})", config_path.display(), framework);
        println!();
        println!("Next steps:");
        println!("  edit asset_directories in {}", config_path.display());
        println!("  assetgen check");
        println!("  assetgen run");

        Ok(ExitCode::SUCCESS)
    }

    fn prompt_framework() -> Result<Framework> {
        let frameworks = ["React", "None (types and utilities only)"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a framework")
            .items(&frameworks)
            .default(0)
            .interact()
            .wrap_err("Failed to get framework selection")?;

        Ok(match selection {
            0 => Framework::React,
            _ => Framework::None,
        })
    }
}
