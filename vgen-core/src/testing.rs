//! Test utilities for code that takes a [`FileSystem`].
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
};

use crate::fs::{DirEntry, FileSystem};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
}

/// In-memory [`FileSystem`] with failure injection.
///
/// Paths are stored exactly as given, so tests should build every path from
/// the same root (e.g. `/project`).
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    failing: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(path.as_ref());
        self
    }

    /// Add a file, creating its ancestors.
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.into()));
        self
    }

    /// Make every write or directory creation at or below `path` fail with
    /// `PermissionDenied`.
    pub fn fail_under(self, path: impl AsRef<Path>) -> Self {
        self.failing.borrow_mut().insert(path.as_ref().to_path_buf());
        self
    }

    /// Read back a file's contents.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// All file paths currently stored, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.failing.borrow().iter().any(|f| path.starts_with(f)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to '{}' denied", path.display()),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.borrow().get(path), Some(Node::Dir))
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.nodes.borrow().get(path), Some(Node::File(_)))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        if !self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' is not a directory", path.display()),
            ));
        }

        // BTreeMap iteration keeps the listing sorted by name
        let entries = self
            .nodes
            .borrow()
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, node)| {
                let name = p.file_name()?.to_string_lossy().into_owned();
                Some(DirEntry {
                    name,
                    is_dir: matches!(node, Node::Dir),
                })
            })
            .collect();
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        if self.is_file(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{}' is a file", path.display()),
            ));
        }
        self.insert_dirs(path);
        Ok(())
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_writable(path)?;
        match path.parent() {
            Some(parent) if self.is_dir(parent) => {}
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent of '{}' does not exist", path.display()),
                ));
            }
        }
        if self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{}' is a directory", path.display()),
            ));
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.to_string()));
        Ok(())
    }
}
