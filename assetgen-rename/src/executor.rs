//! Applying computed renames to the filesystem.

use std::{io, path::Path};

use tracing::{error, info};

use crate::{AssetFileRef, RenameResult};

/// Filesystem operations the rename executor needs.
pub trait FileSystem: Send + Sync {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as taken
        std::fs::symlink_metadata(path).is_ok()
    }
}

/// Renames one asset at a time, never failing the caller.
#[derive(Debug, Clone)]
pub struct RenameExecutor<F: FileSystem> {
    fs: F,
    dry_run: bool,
}

impl<F: FileSystem> RenameExecutor<F> {
    pub fn new(fs: F) -> Self {
        Self { fs, dry_run: false }
    }

    /// Report renames without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Give `asset` the stem `new_stem`, keeping its extension.
    ///
    /// Returns `None` without any filesystem call when the stem is unchanged,
    /// and `None` after logging when the target is taken or the OS refuses.
    pub fn rename(
        &self,
        root_name: &str,
        asset: &AssetFileRef,
        new_stem: &str,
    ) -> Option<RenameResult> {
        if new_stem == asset.stem {
            return None;
        }

        let new_name = asset.file_name_with_stem(new_stem);
        let old_path = asset.path();
        let new_path = asset.directory.join(&new_name);

        // A case-only rename targets the same file on case-insensitive filesystems.
        let same_file = new_name.to_lowercase() == asset.original_filename.to_lowercase();
        if !same_file && self.fs.exists(&new_path) {
            error!(
                "cannot rename {} to {}: target already exists",
                old_path.display(),
                new_name
            );
            return None;
        }

        if !self.dry_run {
            if let Err(err) = self.fs.rename(&old_path, &new_path) {
                error!("failed to rename {}: {}", old_path.display(), err);
                return None;
            }
        }

        info!(
            "{}{} -> {}",
            if self.dry_run { "[dry run] " } else { "" },
            asset.original_filename,
            new_name
        );

        Some(RenameResult {
            asset_root_name: root_name.to_string(),
            directory: asset.directory.clone(),
            original_name: asset.original_filename.clone(),
            new_name,
            old_path,
            new_path,
        })
    }
}
