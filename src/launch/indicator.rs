//! Busy indicator shown while assets deploy.

use crate::logger::BusyLine;

/// Indeterminate progress display owned by the interactive thread.
pub trait BusyIndicator {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Single terminal line, cleared when hidden.
#[derive(Default)]
pub struct ConsoleIndicator {
    line: Option<BusyLine>,
}

impl ConsoleIndicator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BusyIndicator for ConsoleIndicator {
    fn show(&mut self) {
        if self.line.is_none() {
            self.line = Some(BusyLine::show("deploy", "staging assets..."));
        }
    }

    fn hide(&mut self) {
        // Dropping the line clears it.
        self.line.take();
    }
}
