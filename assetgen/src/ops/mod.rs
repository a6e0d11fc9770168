//! Core operations.
//!
//! This module contains the business logic for assetgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod rename;

pub use check::check;
pub use generate::generate;
pub use rename::rename;
