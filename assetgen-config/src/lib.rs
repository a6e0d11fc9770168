//! Typed `assetgen.toml` configuration.
//!
//! Parsing goes through `serde` + `toml`; every validation failure is a
//! [`miette::Diagnostic`] pointing at the offending text.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod framework;
mod template;

pub use config::{
    AssetRoot, CleanScope, Config, Conventions, DEFAULT_EXTENSIONS, DEFAULT_SEPARATOR,
    FileGeneration, Formatting,
};
pub use error::{Error, Result};
pub use file::AssetgenToml;
pub use framework::Framework;
pub use template::template;
