//! `run` command: deploy, launch the renderer, follow host events.
//!
//! Host events arrive as stdin lines (`pause`, `resume`, `quit`). Ctrl+C
//! delivers `destroy`. End of input only stops the reader: a closed or
//! silent stdin leaves the launch running until `quit` or Ctrl+C.

use std::io::{self, BufRead, BufReader, Read};
use std::thread;

use anyhow::{Context, Result};
use crossbeam::channel::{self, Receiver, Sender};

use super::deploy::copy_task;
use crate::config::RunnerConfig;
use crate::launch::{
    BusyIndicator, ConsoleIndicator, HeadlessRenderer, HostEvent, LaunchCoordinator,
    RendererFactory, event_loop,
};
use crate::{core, debug, log};

pub fn run_launch(config: &RunnerConfig) -> Result<()> {
    let task = copy_task(config)?;
    let (tx, rx) = channel::unbounded();
    core::register_host_events(tx.clone());

    let mut coordinator = LaunchCoordinator::new(
        task,
        &config.deploy.files_dir,
        config.render.scale,
        HeadlessRenderer::factory(),
        ConsoleIndicator::new(),
    );
    log!("launch"; "scale {}, type pause/resume/quit", config.render.scale);

    drive(&mut coordinator, io::stdin(), tx, &rx)?;
    log!("launch"; "terminated");
    Ok(())
}

/// Queue `create`, start reading `input` for host events, run the loop.
///
/// `create` is queued before the reader starts, so anything typed (or an
/// immediate end of input) lands behind it.
fn drive<F, I>(
    coordinator: &mut LaunchCoordinator<F, I>,
    input: impl Read + Send + 'static,
    events: Sender<HostEvent>,
    receiver: &Receiver<HostEvent>,
) -> Result<()>
where
    F: RendererFactory,
    I: BusyIndicator,
{
    events
        .send(HostEvent::Create)
        .context("host event channel closed")?;
    spawn_reader(input, events)?;
    event_loop::run(coordinator, receiver)
}

fn spawn_reader(input: impl Read + Send + 'static, events: Sender<HostEvent>) -> Result<()> {
    thread::Builder::new()
        .name("pge-host".into())
        .spawn(move || forward_lines(BufReader::new(input), &events))
        .context("cannot start stdin reader")?;
    Ok(())
}

/// Parse one host event per line until input ends or the loop stops listening.
fn forward_lines(input: impl BufRead, events: &Sender<HostEvent>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                debug!("launch"; "stdin closed: {}", e);
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<HostEvent>() {
            Ok(event) => {
                debug!("launch"; "host event: {}", event);
                if events.send(event).is_err() {
                    return;
                }
            }
            Err(e) => log!("error"; "{:#}", e),
        }
    }
    debug!("launch"; "end of host input, reader stopped");
}
