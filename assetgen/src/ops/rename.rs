//! Rename operation - the clean and organize passes.

use assetgen_config::Config;
use assetgen_rename::{PassKind, PassReport, PassRunner};

/// Options for a rename pass.
pub struct RenameOptions {
    /// Report renames without applying them.
    pub dry_run: bool,
    /// Process asset directories one after another.
    pub sequential: bool,
}

/// Execute one pass over the config's asset directories.
pub fn rename(config: &Config, kind: PassKind, opts: &RenameOptions) -> PassReport {
    PassRunner::from_config(config)
        .parallel(!opts.sequential)
        .dry_run(opts.dry_run)
        .run(kind)
}
