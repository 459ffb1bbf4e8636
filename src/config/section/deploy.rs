//! `[deploy]` section configuration.
//!
//! Where packaged assets come from and where their mirror lands.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! source = "assets"      # Directory served as the packaged asset store
//! files_dir = ".pge"     # App-private files directory
//! segment = "pge"        # Subdirectory of files_dir receiving the tree
//! buffer_size = 1024     # Copy buffer in bytes
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::deploy::{DEFAULT_BUFFER_SIZE, DEFAULT_SEGMENT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Root directory of the packaged asset store.
    pub source: PathBuf,

    /// App-private files directory.
    pub files_dir: PathBuf,

    /// Single path segment appended to `files_dir`.
    pub segment: String,

    /// Copy buffer size in bytes.
    pub buffer_size: usize,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets"),
            files_dir: PathBuf::from(".pge"),
            segment: DEFAULT_SEGMENT.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DeployConfig {
    pub const SEGMENT: FieldPath = FieldPath::new("deploy.segment");
    pub const BUFFER_SIZE: FieldPath = FieldPath::new("deploy.buffer_size");

    /// Resolve relative directories against `root`.
    pub fn normalize(&mut self, root: &Path) {
        self.source = root.join(&self.source);
        self.files_dir = root.join(&self.files_dir);
    }

    /// Validate deploy configuration.
    ///
    /// # Checks
    /// - `buffer_size` must be positive.
    /// - `segment` must be one plain path component.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.buffer_size == 0 {
            diag.error(Self::BUFFER_SIZE, "must be greater than 0");
        }

        let segment = self.segment.as_str();
        if segment.is_empty() {
            diag.error(Self::SEGMENT, "must not be empty");
        } else if matches!(segment, "." | "..") || segment.contains(['/', '\\', '\0']) {
            diag.error_with_hint(
                Self::SEGMENT,
                format!("`{segment}` is not a single directory name"),
                "use a plain name such as \"pge\"",
            );
        }
    }
}
