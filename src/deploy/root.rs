//! Deployment destination.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Subdirectory of the app-private files directory that receives the tree.
pub const DEFAULT_SEGMENT: &str = "pge";

/// Absolute directory the asset tree is mirrored into.
///
/// Layout: `<files_dir>/<segment>/...`. No manifest or version marker is
/// written next to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRoot {
    path: PathBuf,
}

impl DeploymentRoot {
    /// Root at `<files_dir>/<segment>`, made absolute against the cwd.
    pub fn under(files_dir: &Path, segment: &str) -> Result<Self> {
        Self::new(files_dir.join(segment))
    }

    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = std::path::absolute(path)
            .with_context(|| format!("cannot resolve deployment root `{}`", path.display()))?;
        Ok(Self { path })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
