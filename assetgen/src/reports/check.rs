//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What `check` found for one configured asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootStatus {
    pub name: String,
    pub path: PathBuf,
    pub enabled: bool,
    /// `None` when the directory could not be read.
    pub assets: Option<usize>,
}

/// Report data from config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub roots: Vec<RootStatus>,
    pub extensions: Vec<String>,
    pub output_dir: PathBuf,
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&format!("Asset directories ({})", self.roots.len()));
        for root in &self.roots {
            let status = match (root.enabled, root.assets) {
                (false, _) => "disabled".to_string(),
                (true, None) => "missing".to_string(),
                (true, Some(1)) => "1 asset".to_string(),
                (true, Some(n)) => format!("{} assets", n),
            };
            out.list_item(&format!("{} ({}): {}", root.name, root.path.display(), status));
        }
        out.newline();

        out.key_value("Extensions", &self.extensions.join(", "));
        out.key_value("Output", &self.output_dir.display().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_check_report() {
        let report = CheckReport {
            config_path: PathBuf::from("assetgen.toml"),
            roots: vec![
                RootStatus {
                    name: "icons".to_string(),
                    path: PathBuf::from("assets/icons"),
                    enabled: true,
                    assets: Some(1),
                },
                RootStatus {
                    name: "images".to_string(),
                    path: PathBuf::from("assets/images"),
                    enabled: true,
                    assets: None,
                },
            ],
            extensions: vec!["svg".to_string(), "png".to_string()],
            output_dir: PathBuf::from("src/generated/assets"),
            warnings: vec!["asset directory 'images' does not exist".to_string()],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: asset directory 'images' does not exist",
                "",
                "✓ assetgen.toml is valid",
                "",
                "Asset directories (2):",
                "  - icons (assets/icons): 1 asset",
                "  - images (assets/images): missing",
                "",
                "Extensions: svg, png",
                "Output: src/generated/assets",
            ]
        );
    }
}
