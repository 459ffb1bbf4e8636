//! Recursive asset tree copier.
//!
//! Walks the store depth-first, pre-order, and mirrors every node under a
//! destination directory:
//!
//! ```text
//! store                          destination
//! ├── a/                 →       dest/a/
//! │   └── b.txt          →       dest/a/b.txt
//! └── c/   (empty)       →       dest/c        (zero-byte file)
//! ```
//!
//! The store has no type query, so a node is a directory exactly when it
//! lists at least one child. An empty or unlistable node is copied as a
//! file. Empty store directories therefore arrive as zero-byte files; code
//! reading the mirrored tree may depend on that, so it stays.
//!
//! Failures are contained per node: a node that fails is logged and counted,
//! and the walk moves on to its siblings.

use std::fmt;
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use thiserror::Error;

use super::fs::{DirStatus, Filesystem};
use crate::asset::{AssetPath, AssetPathError, AssetStore};
use crate::{debug, log};

/// Copy buffer size used unless configured otherwise.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

// ============================================================================
// Errors
// ============================================================================

/// Failure of a single node. Never escapes [`AssetCopier::deploy`].
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("cannot create directory `{}`", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open asset `{asset}`")]
    Open {
        asset: AssetPath,
        #[source]
        source: io::Error,
    },

    #[error("cannot create `{}`", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copying `{asset}` failed")]
    Copy {
        asset: AssetPath,
        #[source]
        source: io::Error,
    },

    #[error("skipping child of `{parent}`")]
    Child {
        parent: AssetPath,
        #[source]
        source: AssetPathError,
    },
}

// ============================================================================
// Telemetry
// ============================================================================

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeploySummary {
    pub files: usize,
    pub dirs: usize,
    pub bytes: u64,
    pub failures: usize,
}

impl DeploySummary {
    /// `true` when every visited node was mirrored.
    pub fn is_complete(&self) -> bool {
        self.failures == 0
    }
}

/// `12 files, 3 dirs, 4096 bytes`, plus `, 2 failed` when nodes failed.
///
/// Failures are kept apart from the other counters: a failed directory or
/// child name is never counted as a file or a dir.
impl fmt::Display for DeploySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} files, {} dirs, {} bytes", self.files, self.dirs, self.bytes)?;
        if self.failures > 0 {
            write!(f, ", {} failed", self.failures)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Counters {
    files: AtomicUsize,
    dirs: AtomicUsize,
    bytes: AtomicU64,
    failures: AtomicUsize,
}

impl Counters {
    fn snapshot(&self) -> DeploySummary {
        DeploySummary {
            files: self.files.load(Ordering::Relaxed),
            dirs: self.dirs.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

// ============================================================================
// Copier
// ============================================================================

/// Mirrors an asset store onto a filesystem.
pub struct AssetCopier<'a> {
    store: &'a dyn AssetStore,
    fs: &'a dyn Filesystem,
    buffer_size: usize,
    counters: Counters,
}

impl<'a> AssetCopier<'a> {
    pub fn new(store: &'a dyn AssetStore, fs: &'a dyn Filesystem) -> Self {
        Self {
            store,
            fs,
            buffer_size: DEFAULT_BUFFER_SIZE,
            counters: Counters::default(),
        }
    }

    /// Set the intermediate buffer size (at least one byte).
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Counters accumulated so far.
    pub fn summary(&self) -> DeploySummary {
        self.counters.snapshot()
    }

    /// Mirror everything reachable from `root` into `destination`.
    ///
    /// Best effort: never fails. Node failures are logged and counted in
    /// [`AssetCopier::summary`].
    pub fn deploy(&self, root: &AssetPath, destination: &Path) {
        if let Err(source) = self.fs.create_dir_all(destination) {
            self.fail(NodeError::CreateDir {
                path: destination.to_path_buf(),
                source,
            });
        }

        self.visit(root, destination);

        log!("deploy"; "{}", self.summary());
    }

    fn visit(&self, path: &AssetPath, destination: &Path) {
        if let Err(err) = self.visit_node(path, destination) {
            self.fail(err);
        }
    }

    fn visit_node(&self, path: &AssetPath, destination: &Path) -> Result<(), NodeError> {
        let children = self.list(path);
        if children.is_empty() {
            if path.is_root() {
                log!("deploy"; "asset store is empty, nothing to deploy");
                return Ok(());
            }
            return self.copy_file(path, destination);
        }

        if !path.is_root() {
            let dir = path.mirror_under(destination);
            let status = self
                .fs
                .create_dir_all(&dir)
                .map_err(|source| NodeError::CreateDir { path: dir, source })?;
            if status == DirStatus::Created {
                self.counters.dirs.fetch_add(1, Ordering::Relaxed);
            }
        }

        for name in children {
            match path.join(&name) {
                Ok(child) => self.visit(&child, destination),
                Err(source) => self.fail(NodeError::Child {
                    parent: path.clone(),
                    source,
                }),
            }
        }
        Ok(())
    }

    /// Listing with the leaf-detection fallback: unlistable means leaf.
    fn list(&self, path: &AssetPath) -> Vec<String> {
        match self.store.list(path) {
            Ok(children) => children,
            Err(e) => {
                log!("deploy"; "cannot list `{}` ({}), treating it as a file", path, e);
                Vec::new()
            }
        }
    }

    fn copy_file(&self, path: &AssetPath, destination: &Path) -> Result<(), NodeError> {
        let target = path.mirror_under(destination);

        if let Some(parent) = target.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|source| NodeError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let mut reader = self.store.open(path).map_err(|source| NodeError::Open {
            asset: path.clone(),
            source,
        })?;
        let mut writer = self
            .fs
            .create_file(&target)
            .map_err(|source| NodeError::Create {
                path: target.clone(),
                source,
            })?;

        let mut buffer = vec![0u8; self.buffer_size];
        let copied = pump(&mut reader, &mut writer, &mut buffer).map_err(|source| {
            NodeError::Copy {
                asset: path.clone(),
                source,
            }
        })?;

        self.counters.files.fetch_add(1, Ordering::Relaxed);
        self.counters.bytes.fetch_add(copied, Ordering::Relaxed);
        debug!("deploy"; "{} ({} bytes)", path, copied);
        Ok(())
    }

    fn fail(&self, err: NodeError) {
        self.counters.failures.fetch_add(1, Ordering::Relaxed);
        log!("error"; "{:#}", anyhow::Error::new(err));
    }
}

/// Copy all bytes from `reader` to `writer` through `buffer`, then flush.
fn pump(reader: &mut dyn Read, writer: &mut dyn Write, buffer: &mut [u8]) -> io::Result<u64> {
    let mut total = 0u64;
    loop {
        let read = match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }
    writer.flush()?;
    Ok(total)
}
