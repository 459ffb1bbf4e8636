//! One-shot background deployment.
//!
//! A [`CopyTask`] runs the copier on a dedicated worker thread and reports
//! back through a single-message channel:
//!
//! ```text
//! interactive thread                 worker ("pge-deploy")
//! ──────────────────                 ─────────────────────
//! CopyTask::spawn ───────────────▶   AssetCopier::deploy (blocking I/O)
//!       │                                   │
//!   Completion ◀──── DeploySummary ─────────┘  (sent exactly once)
//! ```
//!
//! The task cannot be cancelled and has no timeout: a stalled store stalls
//! the worker, and the completion never fires.

use std::io;
use std::sync::Arc;
use std::thread;

use crossbeam::channel::{self, Receiver, RecvError};

use super::copier::{AssetCopier, DEFAULT_BUFFER_SIZE, DeploySummary};
use super::fs::Filesystem;
use super::root::DeploymentRoot;
use crate::asset::{AssetPath, AssetStore};
use crate::log;

/// Terminal state of a copy task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Completed(DeploySummary),
    /// Some nodes failed. `None` when the worker died before reporting.
    FailedPartial(Option<DeploySummary>),
}

impl TaskOutcome {
    /// Interpret the message (or hang-up) received from a [`Completion`].
    pub fn from_signal(signal: Result<DeploySummary, RecvError>) -> Self {
        match signal {
            Ok(summary) if summary.is_complete() => Self::Completed(summary),
            Ok(summary) => Self::FailedPartial(Some(summary)),
            Err(RecvError) => Self::FailedPartial(None),
        }
    }

    pub fn summary(&self) -> Option<DeploySummary> {
        match self {
            Self::Completed(summary) => Some(*summary),
            Self::FailedPartial(summary) => *summary,
        }
    }
}

/// A deployment pass bound to one destination. Consumed by [`CopyTask::spawn`].
pub struct CopyTask {
    store: Arc<dyn AssetStore>,
    fs: Arc<dyn Filesystem>,
    source: AssetPath,
    root: DeploymentRoot,
    buffer_size: usize,
}

impl CopyTask {
    pub fn new(
        store: Arc<dyn AssetStore>,
        fs: Arc<dyn Filesystem>,
        source: AssetPath,
        root: DeploymentRoot,
    ) -> Self {
        Self {
            store,
            fs,
            source,
            root,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub fn root(&self) -> &DeploymentRoot {
        &self.root
    }

    /// Start the walk on a dedicated worker thread.
    pub fn spawn(self) -> io::Result<Completion> {
        let (tx, rx) = channel::bounded(1);

        thread::Builder::new()
            .name("pge-deploy".into())
            .spawn(move || {
                let copier = AssetCopier::new(self.store.as_ref(), self.fs.as_ref())
                    .with_buffer_size(self.buffer_size);
                copier.deploy(&self.source, self.root.path());
                // Receiver may be gone if the host was torn down mid-walk.
                let _ = tx.send(copier.summary());
            })?;

        Ok(Completion { rx })
    }
}

/// Completion signal of a spawned [`CopyTask`].
#[derive(Debug)]
pub struct Completion {
    rx: Receiver<DeploySummary>,
}

impl Completion {
    /// Channel carrying the single completion message, for `select!`.
    pub fn receiver(&self) -> &Receiver<DeploySummary> {
        &self.rx
    }

    /// Block until the worker finishes.
    pub fn wait(self) -> TaskOutcome {
        let outcome = TaskOutcome::from_signal(self.rx.recv());
        if outcome == TaskOutcome::FailedPartial(None) {
            log!("error"; "deployment worker stopped without reporting");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetReader, MemStore};
    use crate::deploy::LocalFs;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Store whose `open` panics, killing the worker.
    struct PanickingStore;

    impl AssetStore for PanickingStore {
        fn list(&self, path: &AssetPath) -> io::Result<Vec<String>> {
            Ok(if path.is_root() { vec!["boom".into()] } else { vec![] })
        }

        fn open(&self, _path: &AssetPath) -> io::Result<AssetReader> {
            panic!("store exploded");
        }
    }

    fn make_task(store: Arc<dyn AssetStore>) -> (TempDir, CopyTask) {
        let dir = TempDir::new().unwrap();
        let root = DeploymentRoot::new(dir.path().join("pge")).unwrap();
        let task = CopyTask::new(store, Arc::new(LocalFs), AssetPath::root(), root);
        (dir, task)
    }

    #[test]
    fn test_spawn_signals_completion_once() {
        let (dir, task) = make_task(Arc::new(MemStore::new().file("a/b.txt", "hi")));

        let completion = task.spawn().unwrap();
        let first = completion
            .receiver()
            .recv_timeout(Duration::from_secs(10))
            .unwrap();
        assert_eq!(first.files, 1);
        assert!(completion.receiver().recv().is_err(), "only one signal");

        assert_eq!(
            fs::read_to_string(dir.path().join("pge/a/b.txt")).unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_wait_reports_completed() {
        let (_dir, task) = make_task(Arc::new(MemStore::new().file("x", "1")));
        let outcome = task.spawn().unwrap().wait();
        assert!(matches!(outcome, TaskOutcome::Completed(s) if s.files == 1));
    }

    #[test]
    fn test_partial_failure_outcome() {
        struct NoOpen;
        impl AssetStore for NoOpen {
            fn list(&self, path: &AssetPath) -> io::Result<Vec<String>> {
                Ok(if path.is_root() { vec!["a".into()] } else { vec![] })
            }
            fn open(&self, _path: &AssetPath) -> io::Result<AssetReader> {
                Err(io::Error::other("gone"))
            }
        }

        let (_dir, task) = make_task(Arc::new(NoOpen));
        let outcome = task.spawn().unwrap().wait();
        assert!(matches!(outcome, TaskOutcome::FailedPartial(Some(s)) if s.failures == 1));
    }

    #[test]
    fn test_worker_panic_is_failed_partial() {
        let (_dir, task) = make_task(Arc::new(PanickingStore));
        let outcome = task.spawn().unwrap().wait();
        assert_eq!(outcome, TaskOutcome::FailedPartial(None));
        assert_eq!(outcome.summary(), None);
    }
}
