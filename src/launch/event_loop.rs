//! Interactive-thread event loop.
//!
//! Multiplexes host notifications with the one-shot deployment completion,
//! so the thread stays responsive while the worker copies assets.

use anyhow::Result;
use crossbeam::channel::{Receiver, select};

use super::coordinator::{LaunchCoordinator, LaunchState};
use super::host::{HostEvent, HostLifecycle};
use super::indicator::BusyIndicator;
use super::renderer::RendererFactory;

/// Drive `coordinator` until it is destroyed or the host hangs up.
///
/// The caller delivers [`HostEvent::Create`] through `events` (or calls
/// `on_create` beforehand).
pub fn run<F, I>(coordinator: &mut LaunchCoordinator<F, I>, events: &Receiver<HostEvent>) -> Result<()>
where
    F: RendererFactory,
    I: BusyIndicator,
{
    while coordinator.state() != LaunchState::Terminated {
        match coordinator.pending_completion().cloned() {
            Some(done) => select! {
                recv(events) -> event => handle(coordinator, event.ok())?,
                recv(done) -> signal => coordinator.finish_deploy(signal),
            },
            None => handle(coordinator, events.recv().ok())?,
        }
    }
    Ok(())
}

fn handle<F, I>(coordinator: &mut LaunchCoordinator<F, I>, event: Option<HostEvent>) -> Result<()>
where
    F: RendererFactory,
    I: BusyIndicator,
{
    match event {
        Some(event) => coordinator.dispatch(event),
        // Host went away without saying goodbye.
        None => {
            coordinator.on_destroy();
            Ok(())
        }
    }
}
