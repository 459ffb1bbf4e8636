//! `deploy` command: one deployment pass, then exit.

use std::sync::Arc;

use anyhow::{Context, Result, bail};

use crate::asset::{AssetPath, DirStore};
use crate::config::RunnerConfig;
use crate::deploy::{CopyTask, DeploymentRoot, LocalFs, TaskOutcome};
use crate::launch::{BusyIndicator, ConsoleIndicator};
use crate::{debug, log};

/// Build the copy task described by `config`.
pub fn copy_task(config: &RunnerConfig) -> Result<CopyTask> {
    let deploy = &config.deploy;
    let store = DirStore::new(&deploy.source);
    if !store.root().is_dir() {
        log!("config"; "asset source {} is not a directory", store.root().display());
    }

    let root = DeploymentRoot::under(&deploy.files_dir, &deploy.segment)?;
    let task = CopyTask::new(
        Arc::new(store),
        Arc::new(LocalFs),
        AssetPath::root(),
        root,
    );
    Ok(task.with_buffer_size(deploy.buffer_size))
}

/// Deploy on the background worker and wait for it.
///
/// Fails if any node could not be copied, after the rest of the tree has
/// been written.
pub fn deploy_assets(config: &RunnerConfig) -> Result<()> {
    let task = copy_task(config)?;
    let target = task.root().path().to_path_buf();

    let mut indicator = ConsoleIndicator::new();
    indicator.show();
    let completion = match task.spawn() {
        Ok(completion) => completion,
        Err(e) => {
            indicator.hide();
            return Err(e).context("cannot start deployment worker");
        }
    };
    let outcome = completion.wait();
    indicator.hide();

    match outcome {
        TaskOutcome::Completed(summary) => {
            debug!("deploy"; "{:?}", summary);
            log!("deploy"; "assets ready in {}", target.display());
            Ok(())
        }
        TaskOutcome::FailedPartial(Some(summary)) => bail!(
            "deployment incomplete ({}) into {}",
            summary,
            target.display()
        ),
        TaskOutcome::FailedPartial(None) => bail!("deployment worker stopped without reporting"),
    }
}
