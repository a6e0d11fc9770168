use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a single asset directory from being processed.
///
/// These never abort a pass; they are collected into the pass report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("asset directory '{name}' is not accessible at '{path}'")]
    RootUnavailable {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset directory '{name}' points at '{path}', which is not a directory")]
    RootNotDirectory { name: String, path: PathBuf },
}
