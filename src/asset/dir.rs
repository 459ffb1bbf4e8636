//! Directory-backed asset store.
//!
//! Serves a directory on disk through the [`AssetStore`] interface, with the
//! same restrictions as a packaged bundle: listings only, no type queries.
//!
//! Mapping rules:
//! - a directory lists its entries sorted by name
//! - a file, or a path that does not exist, lists as empty
//! - opening a directory yields an empty stream (the node has no bytes)

use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use super::{AssetPath, AssetReader, AssetStore};
use crate::debug;

/// Asset store rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &AssetPath) -> PathBuf {
        path.mirror_under(&self.root)
    }
}

impl AssetStore for DirStore {
    fn list(&self, path: &AssetPath) -> io::Result<Vec<String>> {
        let dir = self.resolve(path);
        let meta = match fs::metadata(&dir) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        if !meta.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!("store"; "skipping non-utf8 name {:?} in {}", raw, path),
            }
        }
        names.sort_unstable();
        Ok(names)
    }

    fn open(&self, path: &AssetPath) -> io::Result<AssetReader> {
        let file = self.resolve(path);
        if file.is_dir() {
            return Ok(Box::new(io::empty()));
        }
        Ok(Box::new(File::open(file)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn make_store() -> (TempDir, DirStore) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/nested")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("a/b.txt"), "hi").unwrap();
        fs::write(dir.path().join("a/nested/c.bin"), [1u8, 2, 3]).unwrap();
        fs::write(dir.path().join("z.txt"), "z").unwrap();
        let store = DirStore::new(dir.path());
        (dir, store)
    }

    fn path(raw: &str) -> AssetPath {
        AssetPath::parse(raw).unwrap()
    }

    #[test]
    fn test_list_root_sorted() {
        let (_dir, store) = make_store();
        assert_eq!(store.list(&AssetPath::root()).unwrap(), ["a", "empty", "z.txt"]);
    }

    #[test]
    fn test_list_nested() {
        let (_dir, store) = make_store();
        assert_eq!(store.list(&path("a")).unwrap(), ["b.txt", "nested"]);
    }

    #[test]
    fn test_list_file_and_missing_are_empty() {
        let (_dir, store) = make_store();
        assert!(store.list(&path("a/b.txt")).unwrap().is_empty());
        assert!(store.list(&path("missing")).unwrap().is_empty());
        assert!(store.list(&path("empty")).unwrap().is_empty());
    }

    #[test]
    fn test_open_file() {
        let (_dir, store) = make_store();
        let mut buf = Vec::new();
        store.open(&path("a/nested/c.bin")).unwrap().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn test_open_directory_is_empty_stream() {
        let (_dir, store) = make_store();
        let mut buf = Vec::new();
        store.open(&path("empty")).unwrap().read_to_end(&mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_open_missing_fails() {
        let (_dir, store) = make_store();
        let err = store.open(&path("missing.txt")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
