//! Writes the full set of generated TypeScript files.

use std::path::{Path, PathBuf};

use assetgen_config::Framework;
use assetgen_core::{GeneratedFile, Overwrite, WriteResult};
use eyre::Result;
use tracing::debug;

use crate::{
    AssetManifest,
    files::{AssetsTs, ComponentTsx, HooksTs, IndexTs, TypesTs, UtilsTs},
};

/// A generated file rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub content: String,
}

/// What happened to each file during [`Generator::generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files whose content was written, including backed-up ones
    pub written: Vec<PathBuf>,
    /// Existing files left alone by the `skip` policy
    pub skipped: Vec<PathBuf>,
    /// `.bak` copies made by the `backup` policy
    pub backups: Vec<PathBuf>,
}

/// TypeScript generator for an [`AssetManifest`].
pub struct Generator<'a> {
    manifest: &'a AssetManifest,
    framework: Framework,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a AssetManifest, framework: Framework) -> Self {
        Self {
            manifest,
            framework,
        }
    }

    /// Every file this generator produces, in write order.
    pub fn files(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        let mut files: Vec<Box<dyn GeneratedFile + 'a>> = vec![
            Box::new(TypesTs::new(self.manifest)),
            Box::new(AssetsTs::new(self.manifest)),
            Box::new(UtilsTs::new(self.manifest)),
        ];
        if self.framework == Framework::React {
            files.push(Box::new(HooksTs));
            files.push(Box::new(ComponentTsx));
        }
        files.push(Box::new(IndexTs::new(self.framework)));
        files
    }

    /// Render all files without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")),
                content: file.contents(),
            })
            .collect()
    }

    /// Write all files under `output_dir` with the given overwrite policy.
    pub fn generate(&self, output_dir: &Path, overwrite: Overwrite) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.path(output_dir);
            match file.write_with(output_dir, overwrite)? {
                WriteResult::Written => {
                    debug!("wrote {}", path.display());
                    result.written.push(path);
                }
                WriteResult::Skipped => {
                    debug!("kept existing {}", path.display());
                    result.skipped.push(path);
                }
                WriteResult::BackedUp(backup) => {
                    debug!("wrote {} (previous saved to {})", path.display(), backup.display());
                    result.written.push(path);
                    result.backups.push(backup);
                }
            }
        }

        Ok(result)
    }
}
