//! Clean and organize pass reports.

use assetgen_rename::{PassOutcome, PassReport};

use super::output::{Output, Report};

fn count(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// One-line summary of how a pass went.
fn summary_line(report: &PassReport) -> String {
    let kind = report.kind;
    let renamed = report.results.len();
    let verb = if report.dry_run { "would be renamed" } else { "renamed" };

    match report.outcome() {
        PassOutcome::NothingToDo => {
            format!("No enabled asset directories, nothing to {}.", kind)
        }
        PassOutcome::Success if renamed == 0 => format!(
            "✓ {}: {} scanned, all names already up to date",
            kind,
            count(report.scanned(), "asset", "assets")
        ),
        PassOutcome::Success => format!(
            "✓ {}: {} scanned, {} {}",
            kind,
            count(report.scanned(), "asset", "assets"),
            renamed,
            verb
        ),
        PassOutcome::PartialSuccess => format!(
            "⚠ {} finished with errors: {} {}, {} failed, {} skipped",
            kind,
            renamed,
            verb,
            count(report.failed_files(), "file", "files"),
            count(report.failures.len(), "directory", "directories")
        ),
    }
}

impl Report for PassReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.warning(&failure.error.to_string());
        }

        if !self.results.is_empty() {
            out.section(if self.dry_run { "Would rename" } else { "Renamed" });
            for result in &self.results {
                out.renamed_item(&result.old_path.display().to_string(), &result.new_name);
            }
            out.newline();
        }

        out.preformatted(&summary_line(self));
    }
}
