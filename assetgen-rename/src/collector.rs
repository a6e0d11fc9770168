//! Folder-name collection across asset roots.

use std::collections::BTreeMap;

use assetgen_config::AssetRoot;
use tracing::{debug, warn};

use crate::walker::{EntryKind, Walker};

/// Case-insensitive set of folder names.
///
/// Built once per clean pass and only read afterwards, so it is shared by
/// reference between root workers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderNameSet {
    // lowercased name -> first spelling seen
    names: BTreeMap<String, String>,
}

impl FolderNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; later spellings of an existing name are ignored.
    pub fn insert(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        self.names
            .entry(name.to_lowercase())
            .or_insert_with(|| name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in their first-seen spelling, ordered case-insensitively.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }

    /// Tokens for one file: its root name and the folders it lives under,
    /// kept only when they are known folder names.
    pub fn scoped<'a>(&self, root_name: &'a str, parts: &'a [String]) -> Vec<&'a str> {
        std::iter::once(root_name)
            .chain(parts.iter().map(String::as_str))
            .filter(|name| self.contains(name))
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for FolderNameSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

/// Gather every root's declared name plus every directory name found under
/// the enabled roots.
///
/// A root that cannot be read contributes only its declared name.
pub fn collect(roots: &[AssetRoot]) -> FolderNameSet {
    let mut set = FolderNameSet::new();

    for root in roots {
        set.insert(&root.name);
    }

    for root in roots.iter().filter(|r| r.enabled) {
        if !root.path.is_dir() {
            warn!(
                "cannot collect folder names for '{}': {} is not a readable directory",
                root.name,
                root.path.display()
            );
            continue;
        }

        let before = set.len();
        for entry in Walker::new(&root.path).entries() {
            if entry.kind != EntryKind::Dir {
                continue;
            }
            if let Some(name) = entry.name() {
                set.insert(name);
            }
        }
        debug!(
            "collected {} new folder names from '{}'",
            set.len() - before,
            root.name
        );
    }

    set
}
