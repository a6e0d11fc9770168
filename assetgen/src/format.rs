//! Running the configured formatter over generated files.

use std::{path::PathBuf, process::Command};

use assetgen_config::Formatting;
use tracing::{debug, warn};

/// What happened when formatting generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Formatting is disabled or nothing was written
    Skipped,
    /// The formatter ran successfully over this many files
    Formatted(usize),
    /// The formatter could not be run or exited with an error
    Failed(String),
}

/// Run `formatting.command` with `files` appended. Never fails the caller:
/// problems are logged and reported as [`FormatOutcome::Failed`].
pub fn format_files(formatting: &Formatting, files: &[PathBuf]) -> FormatOutcome {
    if !formatting.enabled || files.is_empty() {
        return FormatOutcome::Skipped;
    }

    let Some((program, args)) = formatting.command.split_first() else {
        return FormatOutcome::Skipped;
    };
    let command = formatting.command.join(" ");

    debug!("running {} on {} files", command, files.len());
    let status = Command::new(program).args(args).args(files).status();

    match status {
        Ok(status) if status.success() => FormatOutcome::Formatted(files.len()),
        Ok(status) => {
            let reason = format!("`{}` exited with {}", command, status);
            warn!("formatting generated files failed: {}", reason);
            FormatOutcome::Failed(reason)
        }
        Err(err) => {
            let reason = format!("could not run `{}`: {}", command, err);
            warn!("formatting generated files failed: {}", reason);
            FormatOutcome::Failed(reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatting(command: &str) -> Formatting {
        Formatting {
            enabled: true,
            command: command.split_whitespace().map(String::from).collect(),
        }
    }

    #[test]
    fn test_disabled_or_empty_is_skipped() {
        let files = vec![PathBuf::from("types.ts")];
        let mut disabled = formatting("prettier --write");
        disabled.enabled = false;

        assert_eq!(format_files(&disabled, &files), FormatOutcome::Skipped);
        assert_eq!(
            format_files(&formatting("prettier --write"), &[]),
            FormatOutcome::Skipped
        );
    }

    #[test]
    fn test_missing_program_is_a_failure_not_an_error() {
        let files = vec![PathBuf::from("types.ts")];
        let outcome = format_files(&formatting("assetgen-no-such-formatter --write"), &files);

        assert!(matches!(outcome, FormatOutcome::Failed(_)));
    }
}
