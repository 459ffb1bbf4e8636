//! Host lifecycle notifications.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

/// Notification delivered by the host process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Create,
    Pause,
    Resume,
    Destroy,
}

impl FromStr for HostEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "create" => Self::Create,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "destroy" | "quit" | "exit" => Self::Destroy,
            other => bail!("unknown host event `{other}`"),
        })
    }
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Destroy => "destroy",
        })
    }
}

/// Receiver of host lifecycle notifications.
pub trait HostLifecycle {
    fn on_create(&mut self) -> Result<()>;
    fn on_pause(&mut self);
    fn on_resume(&mut self);
    fn on_destroy(&mut self);

    /// Route one event to its handler.
    fn dispatch(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::Create => return self.on_create(),
            HostEvent::Pause => self.on_pause(),
            HostEvent::Resume => self.on_resume(),
            HostEvent::Destroy => self.on_destroy(),
        }
        Ok(())
    }
}
