//! Writable filesystem interface.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Byte sink for one mirrored file.
pub type FileWriter = Box<dyn Write + Send>;

/// Outcome of a successful directory creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Destination side of a deployment.
pub trait Filesystem: Send + Sync {
    /// Create `path` and all missing ancestors.
    ///
    /// An existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> io::Result<DirStatus>;

    /// Open `path` for writing, truncating or creating it.
    fn create_file(&self, path: &Path) -> io::Result<FileWriter>;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<DirStatus> {
        if path.is_dir() {
            return Ok(DirStatus::AlreadyExists);
        }
        fs::create_dir_all(path)?;
        Ok(DirStatus::Created)
    }

    fn create_file(&self, path: &Path) -> io::Result<FileWriter> {
        Ok(Box::new(File::create(path)?))
    }
}
