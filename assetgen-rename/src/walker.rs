//! Recursive directory traversal.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::PathParts;

/// What a [`WalkEntry`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// A directory or regular file found beneath a walker's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Directories between the root and this entry (the entry itself excluded).
    pub parts: PathParts,
    pub kind: EntryKind,
}

impl WalkEntry {
    /// Final path component as UTF-8, if it is valid UTF-8.
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Depth-first traversal of everything beneath a root.
///
/// Entries are visited in file-name order at every level. Unreadable
/// directories are logged and skipped; the walk carries on with their
/// siblings. Entries below a folder whose name is not valid UTF-8 are
/// skipped too, since no name can be built from it. Symbolic links are not
/// followed.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every directory and regular file under the root.
    ///
    /// Each call starts a fresh traversal.
    pub fn entries(&self) -> impl Iterator<Item = WalkEntry> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |result| match result {
                Ok(entry) => self.to_entry(entry),
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    warn!("skipping unreadable path {}: {}", path, err);
                    None
                }
            })
    }

    /// Regular files whose extension is in `extensions`.
    pub fn assets<'a>(
        &'a self,
        extensions: &'a [String],
    ) -> impl Iterator<Item = WalkEntry> + 'a {
        self.entries()
            .filter(move |e| e.kind == EntryKind::File && is_asset(&e.path, extensions))
    }

    fn to_entry(&self, entry: walkdir::DirEntry) -> Option<WalkEntry> {
        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            debug!("ignoring {}: not a regular file", entry.path().display());
            return None;
        };

        let path = entry.into_path();
        let Some(parts) = parts_below(&self.root, &path) else {
            warn!(
                "skipping {}: a folder name is not valid UTF-8",
                path.display()
            );
            return None;
        };

        Some(WalkEntry { path, parts, kind })
    }
}

/// Folder names between `root` and `path`, or `None` when one of them is not
/// valid UTF-8.
fn parts_below(root: &Path, path: &Path) -> Option<PathParts> {
    let Some(parent) = path.strip_prefix(root).ok().and_then(Path::parent) else {
        return Some(PathParts::new());
    };
    parent
        .components()
        .map(|c| c.as_os_str().to_str().map(str::to_string))
        .collect()
}

/// Whether `path` has one of `extensions` (compared case-insensitively, no dot).
pub fn is_asset(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_entries_are_sorted_and_carry_parts() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b/inner/z.svg");
        touch(temp.path(), "a.svg");
        touch(temp.path(), "b/c.svg");

        let walker = Walker::new(temp.path());
        let entries: Vec<(String, PathParts, EntryKind)> = walker
            .entries()
            .map(|e| (e.name().unwrap().to_string(), e.parts, e.kind))
            .collect();

        assert_eq!(
            entries,
            vec![
                ("a.svg".to_string(), vec![], EntryKind::File),
                ("b".to_string(), vec![], EntryKind::Dir),
                ("c.svg".to_string(), vec!["b".to_string()], EntryKind::File),
                ("inner".to_string(), vec!["b".to_string()], EntryKind::Dir),
                (
                    "z.svg".to_string(),
                    vec!["b".to_string(), "inner".to_string()],
                    EntryKind::File
                ),
            ]
        );
    }

    #[test]
    fn test_assets_filters_by_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "one.SVG");
        touch(temp.path(), "two.png");
        touch(temp.path(), "notes.txt");
        touch(temp.path(), "README");

        let walker = Walker::new(temp.path());
        let extensions = exts(&["svg", "png"]);
        let names: Vec<String> = walker
            .assets(&extensions)
            .map(|e| e.name().unwrap().to_string())
            .collect();

        assert_eq!(names, ["one.SVG", "two.png"]);
    }

    #[test]
    fn test_walker_is_restartable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "x/y.svg");

        let walker = Walker::new(temp.path());

        assert_eq!(walker.entries().count(), 2);
        assert_eq!(walker.entries().count(), 2);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let walker = Walker::new(temp.path().join("missing"));

        assert_eq!(walker.entries().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_folder_contents_are_skipped() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let temp = TempDir::new().unwrap();
        let bad = temp.path().join(OsStr::from_bytes(b"ho\xFFme"));
        fs::create_dir(&bad).unwrap();
        fs::write(bad.join("icon.svg"), "x").unwrap();
        touch(temp.path(), "good/icon.svg");

        let walker = Walker::new(temp.path());
        let extensions = exts(&["svg"]);
        let assets: Vec<PathParts> = walker.assets(&extensions).map(|e| e.parts).collect();

        assert_eq!(assets, vec![vec!["good".to_string()]]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_folder_is_skipped_and_siblings_walked() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/one.svg");
        touch(temp.path(), "locked/hidden.svg");
        touch(temp.path(), "z/two.svg");
        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let walker = Walker::new(temp.path());
        let extensions = exts(&["svg"]);
        let names: Vec<String> = walker
            .assets(&extensions)
            .map(|e| e.name().unwrap().to_string())
            .collect();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(names, ["one.svg", "two.svg"]);
    }

    #[test]
    fn test_is_asset() {
        let extensions = exts(&["svg", ".png"]);

        assert!(is_asset(Path::new("a/b.svg"), &extensions));
        assert!(is_asset(Path::new("a/b.PNG"), &extensions));
        assert!(!is_asset(Path::new("a/b.jpg"), &extensions));
        assert!(!is_asset(Path::new("a/.svg"), &extensions));
        assert!(!is_asset(Path::new("a/svg"), &extensions));
    }
}
