//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod pass;

pub use check::{CheckReport, RootStatus};
pub use generate::{GenerateReport, GenerationResult, WrittenResult};
pub use output::{Output, Report, TerminalOutput};
