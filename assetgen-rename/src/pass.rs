//! Clean and organize passes over every enabled asset root.

use std::{collections::HashSet, fmt, path::PathBuf};

use assetgen_config::{AssetRoot, CleanScope, Config};
use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::{
    AssetFileRef, Error, FileSystem, PathParts, RenameExecutor, RenameResult, StdFileSystem,
    cleaner::NameCleaner,
    collector::{FolderNameSet, collect},
    organizer::organize,
    walker::Walker,
};

/// Which renaming pass to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Strip folder-name segments from stems
    Clean,
    /// Prefix stems with root name and folder path
    Organize,
}

impl PassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassKind::Clean => "clean",
            PassKind::Organize => "organize",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a [`PassRunner`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    Idle,
    CollectingFolderNames,
    ProcessingRoots,
    Done,
}

/// Settings shared by every root worker in a pass.
#[derive(Debug, Clone)]
pub struct PassOptions {
    pub separator: char,
    pub extensions: Vec<String>,
    pub clean_scope: CleanScope,
    /// Process roots on the rayon pool instead of one after another
    pub parallel: bool,
    pub dry_run: bool,
}

impl PassOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            separator: config.separator(),
            extensions: config.extensions().to_vec(),
            clean_scope: config.conventions.clean_scope,
            parallel: true,
            dry_run: false,
        }
    }
}

/// Per-root counts for a finished pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootSummary {
    pub name: String,
    /// Asset files found
    pub scanned: usize,
    pub renamed: usize,
    /// Renames that were computed but could not be applied
    pub failed: usize,
}

/// A root that could not be processed at all.
#[derive(Debug)]
pub struct RootFailure {
    pub root: String,
    pub error: Error,
}

/// How a pass ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// No enabled asset directories
    NothingToDo,
    /// Every root and every file was processed
    Success,
    /// Some roots or files failed; the rest were processed
    PartialSuccess,
}

/// Aggregated result of one pass.
#[derive(Debug)]
pub struct PassReport {
    pub kind: PassKind,
    pub dry_run: bool,
    /// Size of the folder-name set (clean pass only)
    pub folder_names: usize,
    /// Renames in root order, then traversal order
    pub results: Vec<RenameResult>,
    pub roots: Vec<RootSummary>,
    pub failures: Vec<RootFailure>,
}

impl PassReport {
    fn empty(kind: PassKind, dry_run: bool) -> Self {
        Self {
            kind,
            dry_run,
            folder_names: 0,
            results: Vec::new(),
            roots: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Asset files seen across all processed roots.
    pub fn scanned(&self) -> usize {
        self.roots.iter().map(|r| r.scanned).sum()
    }

    /// Files whose rename could not be applied.
    pub fn failed_files(&self) -> usize {
        self.roots.iter().map(|r| r.failed).sum()
    }

    pub fn outcome(&self) -> PassOutcome {
        if self.roots.is_empty() && self.failures.is_empty() {
            PassOutcome::NothingToDo
        } else if !self.failures.is_empty() || self.failed_files() > 0 {
            PassOutcome::PartialSuccess
        } else {
            PassOutcome::Success
        }
    }
}

/// How a root worker computes new stems.
#[derive(Clone, Copy)]
enum Strategy<'a> {
    Clean(&'a FolderNameSet),
    Organize,
}

/// Runs a pass over a set of asset roots.
pub struct PassRunner<F: FileSystem = StdFileSystem> {
    roots: Vec<AssetRoot>,
    options: PassOptions,
    fs: F,
    state: PassState,
}

impl PassRunner<StdFileSystem> {
    /// Runner over the config's asset directories on the real filesystem.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.asset_directories.clone(),
            PassOptions::from_config(config),
            StdFileSystem,
        )
    }
}

impl<F: FileSystem> PassRunner<F> {
    pub fn new(roots: Vec<AssetRoot>, options: PassOptions, fs: F) -> Self {
        Self {
            roots,
            options,
            fs,
            state: PassState::Idle,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.options.dry_run = dry_run;
        self
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    /// Run one pass. Never fails as a whole: broken roots are reported in
    /// [`PassReport::failures`] and the others still run.
    pub fn run(&mut self, kind: PassKind) -> PassReport {
        self.transition(PassState::Idle);
        let dry_run = self.options.dry_run;

        if !self.roots.iter().any(|r| r.enabled) {
            info!("no enabled asset directories, nothing to {}", kind);
            self.transition(PassState::Done);
            return PassReport::empty(kind, dry_run);
        }

        let folder_names = match kind {
            PassKind::Clean => {
                self.transition(PassState::CollectingFolderNames);
                Some(collect(&self.roots))
            }
            PassKind::Organize => None,
        };
        let strategy = match &folder_names {
            Some(names) => Strategy::Clean(names),
            None => Strategy::Organize,
        };

        self.transition(PassState::ProcessingRoots);
        let outcomes = self.process_roots(strategy);

        let mut report = PassReport::empty(kind, dry_run);
        report.folder_names = folder_names.as_ref().map_or(0, FolderNameSet::len);
        for (root, outcome) in outcomes {
            match outcome {
                Ok((summary, results)) => {
                    report.roots.push(summary);
                    report.results.extend(results);
                }
                Err(error) => {
                    error!("{} pass skipped '{}': {}", kind, root, error);
                    report.failures.push(RootFailure { root, error });
                }
            }
        }

        self.transition(PassState::Done);
        report
    }

    fn transition(&mut self, next: PassState) {
        debug!("pass state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn process_roots(
        &self,
        strategy: Strategy<'_>,
    ) -> Vec<(String, Result<(RootSummary, Vec<RenameResult>), Error>)> {
        let enabled: Vec<&AssetRoot> = self.roots.iter().filter(|r| r.enabled).collect();
        let work = |root: &&AssetRoot| (root.name.clone(), self.process_root(root, strategy));

        if self.options.parallel {
            enabled.par_iter().map(work).collect()
        } else {
            enabled.iter().map(work).collect()
        }
    }

    /// Walk one root completely, then rename its assets one at a time.
    fn process_root(
        &self,
        root: &AssetRoot,
        strategy: Strategy<'_>,
    ) -> Result<(RootSummary, Vec<RenameResult>), Error> {
        let metadata = std::fs::metadata(&root.path).map_err(|source| Error::RootUnavailable {
            name: root.name.clone(),
            path: root.path.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(Error::RootNotDirectory {
                name: root.name.clone(),
                path: root.path.clone(),
            });
        }

        let assets: Vec<(AssetFileRef, PathParts)> = Walker::new(&root.path)
            .assets(&self.options.extensions)
            .filter_map(|entry| AssetFileRef::from_path(&entry.path).map(|a| (a, entry.parts)))
            .collect();

        let executor = RenameExecutor::new(&self.fs).dry_run(self.options.dry_run);
        let sep = self.options.separator;
        let mut summary = RootSummary {
            name: root.name.clone(),
            scanned: assets.len(),
            ..RootSummary::default()
        };
        let mut results = Vec::new();
        let mut claimed: HashSet<PathBuf> = HashSet::new();

        for (asset, parts) in &assets {
            let new_stem = match strategy {
                Strategy::Clean(names) => {
                    let cleaner = match self.options.clean_scope {
                        CleanScope::Path => NameCleaner::new(names.scoped(&root.name, parts), sep),
                        CleanScope::Global => NameCleaner::new(names.iter(), sep),
                    };
                    cleaner.clean(&asset.stem)
                }
                Strategy::Organize => organize(&asset.stem, parts, &root.name, sep),
            };
            if new_stem == asset.stem {
                continue;
            }

            // In a dry run nothing moves on disk, so collisions between
            // files of this pass are only visible here.
            let target = asset.path_with_stem(&new_stem);
            if !claimed.insert(target.clone()) {
                error!(
                    "cannot rename {}: {} is already the target of another file",
                    asset.path().display(),
                    target.display()
                );
                summary.failed += 1;
                continue;
            }

            match executor.rename(&root.name, asset, &new_stem) {
                Some(result) => {
                    summary.renamed += 1;
                    results.push(result);
                }
                None => summary.failed += 1,
            }
        }

        info!(
            "{}: {} assets scanned, {} renamed",
            root.name, summary.scanned, summary.renamed
        );
        Ok((summary, results))
    }
}
