//! In-memory asset store for tests.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Cursor, ErrorKind};
use std::sync::Arc;

use super::{AssetPath, AssetReader, AssetStore};

/// Asset tree held in memory.
///
/// Directories are implied by the files beneath them; [`MemStore::dir`]
/// adds an explicitly empty one.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    children: BTreeMap<AssetPath, BTreeSet<String>>,
    files: BTreeMap<AssetPath, Arc<[u8]>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its ancestors.
    pub fn file(mut self, raw: &str, content: impl AsRef<[u8]>) -> Self {
        let path = AssetPath::parse(raw).expect("valid asset path");
        self.link(&path);
        self.files.insert(path, Arc::from(content.as_ref()));
        self
    }

    /// Add an empty directory.
    pub fn dir(mut self, raw: &str) -> Self {
        let path = AssetPath::parse(raw).expect("valid asset path");
        self.link(&path);
        self.children.entry(path).or_default();
        self
    }

    fn link(&mut self, path: &AssetPath) {
        let mut parent = AssetPath::root();
        for segment in path.segments() {
            self.children
                .entry(parent.clone())
                .or_default()
                .insert(segment.to_string());
            parent = parent.join(segment).expect("validated segment");
        }
    }
}

impl AssetStore for MemStore {
    fn list(&self, path: &AssetPath) -> io::Result<Vec<String>> {
        Ok(self
            .children
            .get(path)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn open(&self, path: &AssetPath) -> io::Result<AssetReader> {
        if let Some(bytes) = self.files.get(path) {
            return Ok(Box::new(Cursor::new(bytes.to_vec())));
        }
        if self.children.contains_key(path) {
            return Ok(Box::new(io::empty()));
        }
        Err(io::Error::new(ErrorKind::NotFound, format!("no asset at `{path}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_files_imply_directories() {
        let store = MemStore::new().file("a/b/c.txt", "x").file("a/d.txt", "y");

        assert_eq!(store.list(&AssetPath::root()).unwrap(), ["a"]);
        assert_eq!(
            store.list(&AssetPath::parse("a").unwrap()).unwrap(),
            ["b", "d.txt"]
        );
        assert!(store.list(&AssetPath::parse("a/d.txt").unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_dir_lists_empty_and_reads_empty() {
        let store = MemStore::new().dir("c");
        let c = AssetPath::parse("c").unwrap();

        assert_eq!(store.list(&AssetPath::root()).unwrap(), ["c"]);
        assert!(store.list(&c).unwrap().is_empty());

        let mut buf = Vec::new();
        store.open(&c).unwrap().read_to_end(&mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_open_unknown() {
        let store = MemStore::new();
        let err = store.open(&AssetPath::parse("nope").unwrap()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
