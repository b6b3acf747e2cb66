//! Core types and utilities for the Vapor resource generator.
//!
//! This crate provides field descriptors, the filesystem capability,
//! project detection and the file writer used by `vaporgen-codegen`
//! and the `vgen` binary.

mod error;
mod field;
mod file;
mod fs;
mod locate;
mod type_mapper;
mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Extension of every generated source file and of the configure marker
pub const SOURCE_EXTENSION: &str = "swift";

pub use error::{Error, Result};
// Field descriptors
pub use field::{DEFAULT_TYPE_TAG, Field};
// File operations
pub use file::{File, GeneratedFile, write_file};
pub use fs::{DirEntry, FileSystem, RealFs};
// Project detection
pub use locate::{APP_DIR, CONFIGURE_MARKER, ProjectRoot, SOURCES_DIR, Strategy, locate_target};
pub use type_mapper::{FieldType, TypeMapper};
// String utilities
pub use utils::{capitalize, is_valid_identifier, pluralize};
