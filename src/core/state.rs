//! Process-wide interrupt handling.
//!
//! Ctrl+C behaves differently depending on whether a launch is running:
//! - Before `register_host_events()`: exit immediately, nothing to tear down
//! - After: deliver `HostEvent::Destroy` so the coordinator terminates cleanly

use std::sync::OnceLock;

use crossbeam::channel::Sender;

use crate::launch::HostEvent;

/// Host event sender for the running launch
static HOST_EVENTS: OnceLock<Sender<HostEvent>> = OnceLock::new();

/// Setup the global Ctrl+C handler. Call once at program start
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        if !forward_interrupt(HOST_EVENTS.get()) {
            std::process::exit(0);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Route later interrupts to the launch event loop.
///
/// Call this before entering the loop. Only the first registration sticks.
pub fn register_host_events(events: Sender<HostEvent>) {
    let _ = HOST_EVENTS.set(events);
}

/// Deliver an interrupt as a destroy event. Returns false if nobody listens.
fn forward_interrupt(events: Option<&Sender<HostEvent>>) -> bool {
    match events {
        Some(tx) if tx.send(HostEvent::Destroy).is_ok() => {
            crate::log!("launch"; "shutting down...");
            true
        }
        _ => false,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel;

    #[test]
    fn test_interrupt_without_listener() {
        assert!(!forward_interrupt(None));
    }

    #[test]
    fn test_interrupt_becomes_destroy() {
        let (tx, rx) = channel::unbounded();
        assert!(forward_interrupt(Some(&tx)));
        assert_eq!(rx.try_recv().unwrap(), HostEvent::Destroy);
    }

    #[test]
    fn test_interrupt_after_loop_exit() {
        let (tx, rx) = channel::unbounded();
        drop(rx);
        assert!(!forward_interrupt(Some(&tx)));
    }
}
