//! Detection of the application source directory inside a Vapor project.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. `Sources/` must exist below the starting directory.
//! 2. A single visible subdirectory of `Sources/` is the target.
//! 3. Otherwise the first subdirectory holding `configure.swift`.
//! 4. Otherwise a subdirectory named `App`.
//! 5. Otherwise the layout is ambiguous.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    SOURCE_EXTENSION,
    error::{Error, Result},
    fs::FileSystem,
};

/// Conventional name of the directory holding all targets
pub const SOURCES_DIR: &str = "Sources";

/// Conventional name of the application target
pub const APP_DIR: &str = "App";

/// File stem marking the target that configures the application
pub const CONFIGURE_MARKER: &str = "configure";

/// Which rule selected the target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `Sources/` has exactly one subdirectory
    SingleTarget,
    /// The directory holds the configure marker file
    ConfigureMarker,
    /// Fallback to the conventional `App` directory
    AppFallback,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::SingleTarget => "only target in Sources",
            Strategy::ConfigureMarker => "contains configure marker",
            Strategy::AppFallback => "conventional App directory",
        };
        f.write_str(s)
    }
}

/// The detected application directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    pub path: PathBuf,
    pub strategy: Strategy,
}

/// Locate the application directory below `start`.
pub fn locate_target(fs: &dyn FileSystem, start: &Path) -> Result<ProjectRoot> {
    let sources = start.join(SOURCES_DIR);
    if !fs.is_dir(&sources) {
        return Err(Error::MissingSourcesDir {
            path: start.to_path_buf(),
        });
    }

    let candidates: Vec<String> = fs
        .read_dir(&sources)
        .map_err(|e| Error::io(&sources, e))?
        .into_iter()
        .filter(|entry| entry.is_dir && !entry.is_hidden())
        .map(|entry| entry.name)
        .collect();
    tracing::debug!(sources = %sources.display(), ?candidates, "scanned targets");

    let found = |name: &str, strategy: Strategy| -> Result<ProjectRoot> {
        let root = ProjectRoot {
            path: sources.join(name),
            strategy,
        };
        tracing::debug!(path = %root.path.display(), %strategy, "selected target");
        Ok(root)
    };

    if let [only] = candidates.as_slice() {
        return found(only, Strategy::SingleTarget);
    }

    let marker = format!("{}.{}", CONFIGURE_MARKER, SOURCE_EXTENSION);
    if let Some(dir) = candidates
        .iter()
        .find(|dir| fs.is_file(&sources.join(dir).join(&marker)))
    {
        return found(dir, Strategy::ConfigureMarker);
    }

    if candidates.iter().any(|dir| dir == APP_DIR) {
        return found(APP_DIR, Strategy::AppFallback);
    }

    Err(Error::AmbiguousProject {
        sources,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFs;

    fn locate(fs: &MemoryFs) -> Result<ProjectRoot> {
        locate_target(fs, Path::new("/project"))
    }

    #[test]
    fn test_missing_sources_dir() {
        let fs = MemoryFs::new().with_dir("/project");

        let err = locate(&fs).unwrap_err();

        assert!(matches!(
            err,
            Error::MissingSourcesDir { ref path } if path == Path::new("/project")
        ));
    }

    #[test]
    fn test_sources_as_file_is_missing() {
        let fs = MemoryFs::new().with_file("/project/Sources", "");

        assert!(matches!(
            locate(&fs).unwrap_err(),
            Error::MissingSourcesDir { .. }
        ));
    }

    #[test]
    fn test_single_target_any_name() {
        let fs = MemoryFs::new().with_dir("/project/Sources/Backend");

        let root = locate(&fs).unwrap();

        assert_eq!(root.path, PathBuf::from("/project/Sources/Backend"));
        assert_eq!(root.strategy, Strategy::SingleTarget);
    }

    #[test]
    fn test_hidden_and_files_are_ignored() {
        let fs = MemoryFs::new()
            .with_dir("/project/Sources/.build")
            .with_dir("/project/Sources/Server")
            .with_file("/project/Sources/notes.txt", "");

        let root = locate(&fs).unwrap();

        assert_eq!(root.path, PathBuf::from("/project/Sources/Server"));
        assert_eq!(root.strategy, Strategy::SingleTarget);
    }

    #[test]
    fn test_marker_wins_over_app() {
        let fs = MemoryFs::new()
            .with_dir("/project/Sources/App")
            .with_file("/project/Sources/Server/configure.swift", "");

        let root = locate(&fs).unwrap();

        assert_eq!(root.path, PathBuf::from("/project/Sources/Server"));
        assert_eq!(root.strategy, Strategy::ConfigureMarker);
    }

    #[test]
    fn test_first_marker_in_listing_order() {
        let fs = MemoryFs::new()
            .with_file("/project/Sources/Beta/configure.swift", "")
            .with_file("/project/Sources/Alpha/configure.swift", "");

        let root = locate(&fs).unwrap();

        assert_eq!(root.path, PathBuf::from("/project/Sources/Alpha"));
    }

    #[test]
    fn test_marker_must_be_a_file() {
        let fs = MemoryFs::new()
            .with_dir("/project/Sources/Server/configure.swift")
            .with_dir("/project/Sources/App");

        let root = locate(&fs).unwrap();

        assert_eq!(root.strategy, Strategy::AppFallback);
    }

    #[test]
    fn test_app_fallback() {
        let fs = MemoryFs::new()
            .with_dir("/project/Sources/App")
            .with_dir("/project/Sources/Run");

        let root = locate(&fs).unwrap();

        assert_eq!(root.path, PathBuf::from("/project/Sources/App"));
        assert_eq!(root.strategy, Strategy::AppFallback);
    }

    #[test]
    fn test_ambiguous_lists_candidates() {
        let fs = MemoryFs::new()
            .with_dir("/project/Sources/Api")
            .with_dir("/project/Sources/Worker");

        let err = locate(&fs).unwrap_err();

        match err {
            Error::AmbiguousProject {
                sources,
                candidates,
            } => {
                assert_eq!(sources, PathBuf::from("/project/Sources"));
                assert_eq!(candidates, ["Api", "Worker"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_sources_is_ambiguous() {
        let fs = MemoryFs::new().with_dir("/project/Sources");

        assert!(matches!(
            locate(&fs).unwrap_err(),
            Error::AmbiguousProject { ref candidates, .. } if candidates.is_empty()
        ));
    }
}
