//! Packaged asset store access.
//!
//! ```text
//! asset/
//! ├── path     # AssetPath (slash-joined, root = "")
//! ├── store    # AssetStore trait (list + open, nothing else)
//! ├── dir      # DirStore: a directory served as a store
//! └── memory   # MemStore: in-memory tree (tests)
//! ```

mod dir;
#[cfg(test)]
mod memory;
mod path;
mod store;

pub use dir::DirStore;
#[cfg(test)]
pub use memory::MemStore;
pub use path::{AssetPath, AssetPathError};
pub use store::{AssetReader, AssetStore};
