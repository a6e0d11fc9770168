//! Writing generated and scaffolded files to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use serde::Deserialize;

/// A file assetgen renders from data and places under an output directory.
pub trait GeneratedFile {
    /// Where the file lives below `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    /// Body of the file, without the header.
    fn render(&self) -> String;

    /// What ends up on disk: the header from [`FileRules`], a blank line,
    /// then the body.
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{}\n\n{}", header, self.render()),
            None => self.render(),
        }
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        self.write_with(base, self.rules().overwrite)
    }

    /// Write, ignoring the policy from [`GeneratedFile::rules`].
    fn write_with(&self, base: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        write_with_policy(&self.path(base), &self.contents(), overwrite)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

fn write_with_policy(path: &Path, content: &str, overwrite: Overwrite) -> Result<WriteResult> {
    let result = match (overwrite, path.exists()) {
        (Overwrite::Skip, true) => {
            tracing::debug!(path = %path.display(), "keeping existing file");
            return Ok(WriteResult::Skipped);
        }
        (Overwrite::Backup, true) => {
            let backup = backup_path(path);
            fs::copy(path, &backup).wrap_err_with(|| {
                format!("failed to back up '{}' to '{}'", path.display(), backup.display())
            })?;
            WriteResult::BackedUp(backup)
        }
        _ => WriteResult::Written,
    };

    write_file(path, content)?;
    Ok(result)
}

/// Path of the single backup copy kept for `path` (`<name>.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// An existing file was left untouched
    Skipped,
    /// The previous content was copied to this path before writing
    BackedUp(PathBuf),
}

impl WriteResult {
    /// Whether the file on disk was touched.
    pub fn is_written(&self) -> bool {
        !matches!(self, WriteResult::Skipped)
    }
}

/// Fixed content at a fixed path, such as the starter `assetgen.toml`.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Replaces any existing file unless [`File::with_rules`] says otherwise.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn write(&self) -> Result<WriteResult> {
        write_with_policy(&self.path, &self.content, self.rules.overwrite)
    }
}

/// What to do with an existing file, and what to put at the top of a new one.
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Generated sources: replaced on every run and marked with `header`.
    pub fn generated(header: &'static str) -> Self {
        Self {
            overwrite: Overwrite::Replace,
            header: Some(header),
        }
    }

    /// Scaffolding written once and then owned by the user.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::Skip,
            header: None,
        }
    }
}

/// Policy for a target file that already exists.
///
/// Spelled `overwrite`, `skip` or `backup` in `assetgen.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overwrite {
    #[default]
    #[serde(rename = "overwrite")]
    Replace,
    Skip,
    /// Keep one `.bak` copy of the previous content, then replace
    Backup,
}

impl Overwrite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overwrite::Replace => "overwrite",
            Overwrite::Skip => "skip",
            Overwrite::Backup => "backup",
        }
    }
}
