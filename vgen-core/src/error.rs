use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for vaporgen-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("could not find a 'Sources' directory in '{path}'")]
    #[diagnostic(
        code(vgen::missing_sources),
        help("run vgen from the root of your Vapor project, or pass --path <DIR>")
    )]
    MissingSourcesDir { path: PathBuf },

    #[error("could not auto-detect the project folder in '{sources}', found {candidates:?}")]
    #[diagnostic(
        code(vgen::ambiguous_project),
        help("keep configure.swift in the application target, or name it 'App'")
    )]
    AmbiguousProject {
        sources: PathBuf,
        candidates: Vec<String>,
    },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(vgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
