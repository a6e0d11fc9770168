//! Filename normalization for asset directories.
//!
//! Two passes keep asset filenames consistent with the folders they live in:
//!
//! - the **clean** pass strips folder names previously baked into filenames
//!   (`icons/home/icons-home-icon.svg` -> `icon.svg`)
//! - the **organize** pass re-applies the canonical `root-folder-stem` scheme
//!   (`icons/home/icon.svg` -> `icons-home-icon.svg`)
//!
//! Both are idempotent. A failure to read a directory or rename a file is
//! logged and skipped; it never stops the rest of the pass.
//!
//! ```ignore
//! use assetgen_config::Config;
//! use assetgen_rename::{PassKind, PassRunner};
//!
//! let config = Config::from_file("assetgen.toml")?;
//! let report = PassRunner::from_config(&config).run(PassKind::Clean);
//! println!("{} files renamed", report.results.len());
//! ```

mod asset;
mod error;
mod executor;
mod pass;

pub mod cleaner;
pub mod collector;
pub mod organizer;
pub mod walker;

pub use asset::{AssetFileRef, PathParts, RenameResult};
pub use cleaner::{NameCleaner, UNNAMED, clean};
pub use collector::{FolderNameSet, collect};
pub use error::Error;
pub use executor::{FileSystem, RenameExecutor, StdFileSystem};
pub use organizer::{is_already_organized, organize};
pub use pass::{
    PassKind, PassOptions, PassOutcome, PassReport, PassRunner, PassState, RootFailure,
    RootSummary,
};
pub use walker::{EntryKind, WalkEntry, Walker, is_asset};
