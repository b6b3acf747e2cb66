//! Report data structures for the generator.
//!
//! This module provides data structures that separate data collection from rendering.
//! The command builds reports, then renders them to an Output target.

mod generate;
mod output;

pub use generate::{DoneReport, PlanReport, PreviewReport};
pub use output::{Output, Report, TerminalOutput};
