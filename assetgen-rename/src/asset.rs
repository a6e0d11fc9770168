//! Asset file references and rename records.

use std::path::{Path, PathBuf};

/// Directory names between an asset root and a file, root-to-leaf.
///
/// Empty when the file sits directly in the root.
pub type PathParts = Vec<String>;

/// A file on disk split into the pieces the renaming passes work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFileRef {
    pub directory: PathBuf,
    pub original_filename: String,
    /// Text after the last dot, without the dot. `None` for `.hidden` or `README`.
    pub extension: Option<String>,
    pub stem: String,
}

impl AssetFileRef {
    /// Split `path` into directory, stem and extension.
    ///
    /// Returns `None` for paths without a UTF-8 file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let original_filename = path.file_name()?.to_str()?.to_string();
        let stem = path.file_stem()?.to_str()?.to_string();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string);
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Some(Self {
            directory,
            original_filename,
            extension,
            stem,
        })
    }

    /// Current location on disk.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.original_filename)
    }

    /// Filename with `stem` replaced and the original extension kept.
    pub fn file_name_with_stem(&self, stem: &str) -> String {
        match &self.extension {
            Some(ext) => format!("{}.{}", stem, ext),
            None => stem.to_string(),
        }
    }

    /// Location the file would have with `stem`.
    pub fn path_with_stem(&self, stem: &str) -> PathBuf {
        self.directory.join(self.file_name_with_stem(stem))
    }
}

/// A rename that actually changed a file's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameResult {
    pub asset_root_name: String,
    pub directory: PathBuf,
    pub original_name: String,
    pub new_name: String,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}
