//! Generate command report data structures.

use std::path::PathBuf;

use assetgen_codegen::PreviewFile;
use assetgen_config::Framework;

use super::output::{Output, Report};
use crate::format::FormatOutcome;

/// Report data from TypeScript generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub framework: Framework,
    /// Asset count per category, in config order.
    pub categories: Vec<(String, usize)>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub written: Vec<PathBuf>,
    /// Existing files kept by the `skip` policy.
    pub skipped: Vec<PathBuf>,
    pub backups: Vec<PathBuf>,
    pub format: FormatOutcome,
}

impl GenerateReport {
    fn total_assets(&self) -> usize {
        self.categories.iter().map(|(_, n)| n).sum()
    }

    fn render_categories(&self, out: &mut dyn Output) {
        out.section(&format!("Assets ({})", self.total_assets()));
        for (name, count) in &self.categories {
            out.list_item(&format!("{}: {}", name, count));
        }
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Generated",
            &format!("{} ({})", self.output_dir.display(), self.framework),
        );
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        for path in &written.skipped {
            out.list_item(&format!("{} (kept existing)", path.display()));
        }
        for path in &written.backups {
            out.list_item(&format!("{} (previous version)", path.display()));
        }

        match &written.format {
            FormatOutcome::Skipped => {}
            FormatOutcome::Formatted(n) => {
                out.newline();
                out.key_value("Formatted", &format!("{} files", n));
            }
            FormatOutcome::Failed(reason) => {
                out.newline();
                out.warning(&format!("generated files were not formatted: {}", reason));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated in {}",
            files.len(),
            self.output_dir.display()
        ));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => {
                self.render_categories(out);
                self.render_written(out, written);
            }
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}
