//! Filesystem capability passed explicitly to every component that touches disk.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// An immediate entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    /// Dot-prefixed entries are never project candidates
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// The filesystem operations the generator needs.
///
/// [`RealFs`] talks to the disk; tests use [`crate::testing::MemoryFs`].
pub trait FileSystem {
    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// List the immediate entries of `path`, sorted by name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Replace the contents of `path` so that readers see either the old
    /// file or the complete new one. The parent directory must exist.
    ///
    /// An overwritten file keeps its permissions. On unix a new file is
    /// created `0644` regardless of the process umask.
    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // Follow symlinks so a linked target directory still counts
            let is_dir = entry.path().is_dir();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;

        // NamedTempFile is created 0600
        match existing {
            Some(permissions) => tmp.as_file().set_permissions(permissions)?,
            None => {
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    tmp.as_file()
                        .set_permissions(fs::Permissions::from_mode(0o644))?;
                }
            }
        }

        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
