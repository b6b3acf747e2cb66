use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    fs::FileSystem,
};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Directory the file lives in, relative to the project root
    fn directory(&self, base: &Path) -> PathBuf;

    /// File name including extension
    fn file_name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Full path of the file below `base`
    fn path(&self, base: &Path) -> PathBuf {
        self.directory(base).join(self.file_name())
    }

    /// Write the file to disk, creating its directory if needed
    fn write(&self, fs: &dyn FileSystem, base: &Path) -> Result<PathBuf> {
        write_file(fs, &self.render(), &self.directory(base), &self.file_name())
    }
}

/// Write `content` to `directory/filename`, creating `directory` and any
/// missing ancestors first. Existing files are replaced.
pub fn write_file(
    fs: &dyn FileSystem,
    content: &str,
    directory: &Path,
    filename: &str,
) -> Result<PathBuf> {
    if !fs.is_dir(directory) {
        tracing::debug!(dir = %directory.display(), "creating directory");
        fs.create_dir_all(directory)
            .map_err(|e| Error::io(directory, e))?;
    }

    let path = directory.join(filename);
    fs.write_atomic(&path, content)
        .map_err(|e| Error::io(&path, e))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(path)
}

/// A rendered file that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Render a generated file below `base` without writing it
    pub fn rendered(file: &dyn GeneratedFile, base: &Path) -> Self {
        Self::new(file.path(base), file.render())
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}
