//! Asset inventory the TypeScript files are generated from.

use std::path::Path;

use assetgen_config::{AssetRoot, Config};
use assetgen_core::to_pascal_case;
use assetgen_rename::{WalkEntry, Walker};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// One asset file as seen by generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Name used in generated code (the file stem)
    pub key: String,
    pub file_name: String,
    /// Lowercased, without the dot
    pub extension: String,
    /// `/`-separated path below the root directory
    pub relative_path: String,
    /// Path used as `src` at runtime
    pub url: String,
}

impl AssetEntry {
    fn from_walk(entry: &WalkEntry, dir_name: &str, public_path: Option<&str>) -> Option<Self> {
        let key = entry.path.file_stem()?.to_str()?.to_string();
        let file_name = entry.name()?.to_string();
        let extension = entry
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let relative_path = entry
            .parts
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(file_name.as_str()))
            .collect::<Vec<_>>()
            .join("/");
        let url = asset_url(public_path, dir_name, &relative_path);

        Some(Self {
            key,
            file_name,
            extension,
            relative_path,
            url,
        })
    }
}

/// Runtime URL of an asset: `<public_path>/<root dir>/<relative path>`.
pub fn asset_url(public_path: Option<&str>, dir_name: &str, relative_path: &str) -> String {
    match public_path.map(|p| p.trim_end_matches('/')) {
        Some(prefix) => format!("{}/{}/{}", prefix, dir_name, relative_path),
        None => format!("{}/{}", dir_name, relative_path),
    }
}

/// The assets of one root, keyed and sorted by [`AssetEntry::key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Asset root name as configured
    pub name: String,
    /// TypeScript union type listing this category's keys
    pub type_name: String,
    assets: IndexMap<String, AssetEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_name = type_name_for(&name);
        Self {
            name,
            type_name,
            assets: IndexMap::new(),
        }
    }

    /// Add an asset unless its key is taken. Returns whether it was added.
    pub fn insert(&mut self, entry: AssetEntry) -> bool {
        if self.assets.contains_key(&entry.key) {
            return false;
        }
        self.assets.insert(entry.key.clone(), entry);
        self.assets.sort_keys();
        true
    }

    pub fn get(&self, key: &str) -> Option<&AssetEntry> {
        self.assets.get(key)
    }

    pub fn assets(&self) -> impl Iterator<Item = &AssetEntry> {
        self.assets.values()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

fn type_name_for(category: &str) -> String {
    let pascal = to_pascal_case(category);
    match pascal.chars().next() {
        None => "AssetName".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}AssetName", pascal),
        Some(_) => format!("{}AssetName", pascal),
    }
}

/// Every enabled root's assets, in config order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    categories: IndexMap<String, Category>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk every enabled root of `config` and collect its assets.
    ///
    /// Unreadable roots produce an empty category and a warning. When two
    /// files in a root share a stem, the first in traversal order is kept.
    pub fn scan(config: &Config) -> Self {
        let public_path = config.file_generation.public_path.as_deref();
        let mut manifest = Self::new();

        for root in config.enabled_roots() {
            let mut category = Category::new(&root.name);
            if root.path.is_dir() {
                scan_root(root, config.extensions(), public_path, &mut category);
            } else {
                warn!(
                    "asset directory '{}' ({}) is not readable, generating no assets for it",
                    root.name,
                    root.path.display()
                );
            }
            debug!("{}: {} assets", category.name, category.len());
            manifest.push(category);
        }

        manifest
    }

    /// Append a category, renaming its type if another category already
    /// produced the same TypeScript name.
    pub fn push(&mut self, mut category: Category) {
        if self.categories.values().any(|c| c.type_name == category.type_name) {
            let base = category.type_name.clone();
            let mut n = 2;
            while self
                .categories
                .values()
                .any(|c| c.type_name == format!("{}{}", base, n))
            {
                n += 1;
            }
            category.type_name = format!("{}{}", base, n);
        }
        self.categories.insert(category.name.clone(), category);
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Total number of assets across categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn scan_root(
    root: &AssetRoot,
    extensions: &[String],
    public_path: Option<&str>,
    category: &mut Category,
) {
    let dir_name = root
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(root.name.as_str())
        .to_string();

    for entry in Walker::new(&root.path).assets(extensions) {
        let Some(asset) = AssetEntry::from_walk(&entry, &dir_name, public_path) else {
            warn!("skipping {}: name is not valid UTF-8", self::display(&entry.path));
            continue;
        };
        let key = asset.key.clone();
        if !category.insert(asset) {
            warn!(
                "{}: '{}' is already used by another file, skipping {}",
                root.name,
                key,
                self::display(&entry.path)
            );
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
