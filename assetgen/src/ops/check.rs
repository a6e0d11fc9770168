//! Check operation - config validation and directory inventory.

use std::path::Path;

use assetgen_config::Config;
use assetgen_rename::Walker;

use crate::reports::{CheckReport, RootStatus};

/// Execute the check operation.
///
/// The config has already been parsed and validated; this looks at what
/// it points to on disk.
pub fn check(config: &Config, config_path: &Path) -> CheckReport {
    let mut warnings = Vec::new();

    if config.asset_directories.is_empty() {
        warnings.push("no asset directories are configured".to_string());
    } else if config.enabled_roots().next().is_none() {
        warnings.push("every asset directory is disabled".to_string());
    }

    let roots: Vec<RootStatus> = config
        .asset_directories
        .iter()
        .map(|root| {
            let assets = (root.enabled && root.path.is_dir())
                .then(|| Walker::new(&root.path).assets(config.extensions()).count());
            if root.enabled && assets.is_none() {
                warnings.push(format!(
                    "asset directory '{}' does not exist at {}",
                    root.name,
                    root.path.display()
                ));
            }
            RootStatus {
                name: root.name.clone(),
                path: root.path.clone(),
                enabled: root.enabled,
                assets,
            }
        })
        .collect();

    let output_dir = &config.file_generation.output_dir;
    for root in config.enabled_roots() {
        if output_dir.starts_with(&root.path) {
            warnings.push(format!(
                "output directory {} is inside asset directory '{}'",
                output_dir.display(),
                root.name
            ));
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        roots,
        extensions: config.extensions().to_vec(),
        output_dir: output_dir.clone(),
        warnings,
    }
}
