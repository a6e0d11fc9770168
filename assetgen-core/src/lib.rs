//! Core utilities and types for assetgen.
//!
//! This crate provides the file writing primitives and string helpers
//! shared by the config, rename and codegen crates.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, backup_path};
// String utilities
pub use utils::{to_camel_case, to_constant_case, to_kebab_case, to_pascal_case, words};
