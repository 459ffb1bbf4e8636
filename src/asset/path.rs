//! Store-internal asset paths.
//!
//! An [`AssetPath`] is a relative, slash-joined sequence of segments. The
//! store root is the empty path:
//!
//! ```text
//! ""            → root
//! "a"           → one segment
//! "a/b.txt"     → two segments
//! ```
//!
//! Segments are validated on construction so a mirrored path can never
//! climb out of the directory it is mirrored under.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while building an [`AssetPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetPathError {
    #[error("empty segment in asset path `{0}`")]
    EmptySegment(String),

    #[error("invalid asset path segment `{0}`")]
    InvalidSegment(String),
}

/// Relative path inside an asset store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath(String);

impl AssetPath {
    /// The store root (empty path).
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Parse a slash-separated path.
    ///
    /// Leading and trailing separators are ignored, so `"/a/b/"` and `"a/b"`
    /// name the same node.
    pub fn parse(raw: &str) -> Result<Self, AssetPathError> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        for segment in trimmed.split('/') {
            if segment.is_empty() {
                return Err(AssetPathError::EmptySegment(raw.to_string()));
            }
            validate_segment(segment)?;
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Append one child segment.
    pub fn join(&self, segment: &str) -> Result<Self, AssetPathError> {
        if segment.is_empty() {
            return Err(AssetPathError::EmptySegment(self.0.clone()));
        }
        validate_segment(segment)?;

        if self.is_root() {
            Ok(Self(segment.to_string()))
        } else {
            Ok(Self(format!("{}/{}", self.0, segment)))
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over segments. The root yields nothing.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Last segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Filesystem path of this node when the tree is mirrored under `root`.
    pub fn mirror_under(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in self.segments() {
            path.push(segment);
        }
        path
    }
}

fn validate_segment(segment: &str) -> Result<(), AssetPathError> {
    let invalid = segment == "."
        || segment == ".."
        || segment.contains('/')
        || segment.contains('\\')
        || segment.contains('\0');

    if invalid {
        Err(AssetPathError::InvalidSegment(segment.to_string()))
    } else {
        Ok(())
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}
