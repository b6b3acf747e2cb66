//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`SwiftFile`] - Imports plus body blocks, rendered as one file

mod code_builder;
mod swift_file;

pub use code_builder::CodeBuilder;
pub use swift_file::SwiftFile;
