//! Launch coordinator: deployment first, renderer second.
//!
//! State flow:
//!
//! ```text
//! Initializing ──create──▶ Deploying ──completion──▶ Ready ──attach──▶ Active
//!                              │                                        │
//!                     pause/resume dropped                 pause/resume forwarded
//! ```
//!
//! Every transition runs on the interactive thread. The only cross-thread
//! step is the completion signal of the [`CopyTask`], which the event loop
//! receives and hands to [`LaunchCoordinator::finish_deploy`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossbeam::channel::{Receiver, RecvError};

use super::host::HostLifecycle;
use super::indicator::BusyIndicator;
use super::renderer::{HostContext, Renderer, RendererFactory};
use super::scale::ResolutionScale;
use crate::deploy::{Completion, CopyTask, DeploySummary, TaskOutcome};
use crate::{debug, log};

/// Where the coordinator is in the launch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Initializing,
    Deploying,
    Ready,
    Active,
    Terminated,
}

/// Owns the copy task, the busy indicator and, later, the renderer.
pub struct LaunchCoordinator<F, I> {
    task: Option<CopyTask>,
    host: HostContext,
    scale: ResolutionScale,
    factory: F,
    indicator: I,
    state: LaunchState,
    completion: Option<Completion>,
    renderer: Option<Box<dyn Renderer>>,
}

impl<F: RendererFactory, I: BusyIndicator> LaunchCoordinator<F, I> {
    pub fn new(
        task: CopyTask,
        files_dir: &Path,
        scale: ResolutionScale,
        factory: F,
        indicator: I,
    ) -> Self {
        let host = HostContext::new(files_dir, task.root().path());
        Self {
            task: Some(task),
            host,
            scale,
            factory,
            indicator,
            state: LaunchState::Initializing,
            completion: None,
            renderer: None,
        }
    }

    #[inline]
    pub fn state(&self) -> LaunchState {
        self.state
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn deployment_root(&self) -> PathBuf {
        self.host.deployment_root().to_path_buf()
    }

    /// Completion channel of the running deployment, if any.
    pub fn pending_completion(&self) -> Option<&Receiver<DeploySummary>> {
        self.completion.as_ref().map(Completion::receiver)
    }

    /// Handle the completion signal on the interactive thread.
    ///
    /// Hides the indicator, constructs and attaches the renderer. Runs at
    /// most once; later calls are ignored.
    pub fn finish_deploy(&mut self, signal: Result<DeploySummary, RecvError>) {
        if self.state != LaunchState::Deploying {
            debug!("launch"; "completion in state {:?}, ignored", self.state);
            return;
        }
        self.completion = None;

        match TaskOutcome::from_signal(signal) {
            TaskOutcome::Completed(summary) => {
                log!("launch"; "assets deployed ({})", summary);
            }
            TaskOutcome::FailedPartial(Some(summary)) => {
                log!("launch"; "assets partially deployed ({}), continuing", summary);
            }
            TaskOutcome::FailedPartial(None) => {
                log!("error"; "deployment worker stopped without reporting, continuing");
            }
        }

        self.indicator.hide();
        self.state = LaunchState::Ready;

        let mut renderer = self.factory.create(&self.host, self.scale);
        renderer.on_resume();
        self.renderer = Some(renderer);
        self.state = LaunchState::Active;
    }
}

impl<F: RendererFactory, I: BusyIndicator> HostLifecycle for LaunchCoordinator<F, I> {
    fn on_create(&mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            debug!("launch"; "repeated create in state {:?}, ignored", self.state);
            return Ok(());
        };

        self.indicator.show();
        let completion = match task.spawn() {
            Ok(completion) => completion,
            Err(e) => {
                self.indicator.hide();
                return Err(e).context("cannot start deployment worker");
            }
        };

        self.completion = Some(completion);
        self.state = LaunchState::Deploying;
        debug!("launch"; "deploying into {}", self.host.deployment_root().display());
        Ok(())
    }

    fn on_pause(&mut self) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.on_pause(),
            None => debug!("launch"; "pause before renderer exists, dropped"),
        }
    }

    fn on_resume(&mut self) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.on_resume(),
            None => debug!("launch"; "resume before renderer exists, dropped"),
        }
    }

    fn on_destroy(&mut self) {
        self.indicator.hide();
        self.state = LaunchState::Terminated;
        debug!("launch"; "destroyed, keeping {}", self.host.deployment_root().display());
    }
}
