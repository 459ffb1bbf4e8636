//! Read-only asset store interface.

use std::io::{self, Read};
use std::sync::Arc;

use super::AssetPath;

/// Byte stream over one asset.
pub type AssetReader = Box<dyn Read + Send>;

/// A packaged, hierarchical, stream-only resource bundle.
///
/// The store exposes no metadata: there is no way to ask whether a path is a
/// directory. Callers infer structure from [`AssetStore::list`] alone.
pub trait AssetStore: Send + Sync {
    /// Names of the immediate children of `path`, in store order.
    ///
    /// Leaves and unknown paths list as empty. An `Err` means the store
    /// could not enumerate the path at all.
    fn list(&self, path: &AssetPath) -> io::Result<Vec<String>>;

    /// Open a read stream over the asset at `path`.
    fn open(&self, path: &AssetPath) -> io::Result<AssetReader>;
}

impl<S: AssetStore + ?Sized> AssetStore for Arc<S> {
    fn list(&self, path: &AssetPath) -> io::Result<Vec<String>> {
        (**self).list(path)
    }

    fn open(&self, path: &AssetPath) -> io::Result<AssetReader> {
        (**self).open(path)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn list(&self, path: &AssetPath) -> io::Result<Vec<String>> {
        (**self).list(path)
    }

    fn open(&self, path: &AssetPath) -> io::Result<AssetReader> {
        (**self).open(path)
    }
}
