//! Asset deployment: mirror the packaged store onto the filesystem.
//!
//! ```text
//! deploy/
//! ├── fs       # Filesystem trait + LocalFs
//! ├── root     # DeploymentRoot (<files_dir>/pge)
//! ├── copier   # AssetCopier: recursive best-effort walk
//! └── task     # CopyTask: one-shot worker + completion signal
//! ```

mod copier;
mod fs;
mod root;
mod task;

pub use copier::{AssetCopier, DEFAULT_BUFFER_SIZE, DeploySummary, NodeError};
pub use fs::{DirStatus, FileWriter, Filesystem, LocalFs};
pub use root::{DEFAULT_SEGMENT, DeploymentRoot};
pub use task::{Completion, CopyTask, TaskOutcome};
