//! Logging utilities with colored output and a busy line.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` for output that only shows with `--verbose`
//! - `BusyLine` for a single in-place status line while work runs
//!
//! # Example
//!
//! ```ignore
//! log!("deploy"; "copied {} files", count);
//!
//! let busy = BusyLine::show("deploy", "staging assets...");
//! // log! output is printed above the busy line
//! drop(busy); // clears the line
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream::Stdout};
use parking_lot::Mutex;
use std::{
    io::{StdoutLock, Write, stdout},
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Owner id and rendered text of the active busy line, if any.
static BUSY: Mutex<Option<(u64, String)>> = Mutex::new(None);

/// Source of busy line ids.
static NEXT_BUSY_ID: AtomicU64 = AtomicU64::new(1);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// When a busy line is showing, the message is printed in its place and the
/// busy line is redrawn below it.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    // Held across the write so a concurrent show/drop cannot interleave.
    let busy = BUSY.lock();
    let mut stdout = stdout().lock();

    clear_line(&mut stdout);
    writeln!(stdout, "{prefix} {message}").ok();

    if let Some((_, line)) = busy.as_ref() {
        write!(stdout, "{line}").ok();
    }

    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let paint: fn(&String) -> String = match module.to_ascii_lowercase().as_str() {
        "deploy" => |p| p.bright_green().bold().to_string(),
        "launch" => |p| p.bright_blue().bold().to_string(),
        "render" => |p| p.bright_cyan().bold().to_string(),
        "error" => |p| p.bright_red().bold().to_string(),
        _ => |p| p.bright_yellow().bold().to_string(),
    };
    prefix.if_supports_color(Stdout, paint).to_string()
}

#[inline]
fn clear_line(stdout: &mut StdoutLock<'_>) {
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine)
    )
    .ok();
}

// ============================================================================
// Busy Line (single-line indeterminate status)
// ============================================================================

/// Single-line indeterminate status display.
///
/// Displays: `[deploy] staging assets...`
///
/// The line stays at the bottom of the output until dropped. Only one busy
/// line is shown at a time; showing a new one takes over the slot, and the
/// replaced handle no longer clears anything when dropped.
pub struct BusyLine {
    id: u64,
}

impl BusyLine {
    pub fn show(module: &str, message: &str) -> Self {
        let line = format!(
            "{} {}",
            colorize_prefix(module),
            message.if_supports_color(Stdout, |m| m.dimmed().to_string())
        );

        let mut busy = BUSY.lock();
        let mut stdout = stdout().lock();
        clear_line(&mut stdout);
        write!(stdout, "{line}").ok();
        stdout.flush().ok();

        let id = NEXT_BUSY_ID.fetch_add(1, Ordering::Relaxed);
        *busy = Some((id, line));
        Self { id }
    }

    /// Whether this line is the one currently displayed.
    pub fn is_current(&self) -> bool {
        matches!(BUSY.lock().as_ref(), Some((owner, _)) if *owner == self.id)
    }
}

/// Empty `slot` if `id` still owns it.
fn release(slot: &mut Option<(u64, String)>, id: u64) -> bool {
    if matches!(slot, Some((owner, _)) if *owner == id) {
        *slot = None;
        true
    } else {
        false
    }
}

impl Drop for BusyLine {
    fn drop(&mut self) {
        let mut busy = BUSY.lock();
        if release(&mut busy, self.id) {
            let mut stdout = stdout().lock();
            clear_line(&mut stdout);
            stdout.flush().ok();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        assert!(colorize_prefix("deploy").contains("[deploy]"));
        assert!(colorize_prefix("Error").contains("[Error]"));
        assert!(colorize_prefix("misc").contains("[misc]"));
    }

    #[test]
    fn test_busy_line_lifecycle() {
        let busy = BusyLine::show("deploy", "staging assets...");
        assert!(busy.is_current());
        log("deploy", "message above the busy line");
        assert!(busy.is_current());
    }

    #[test]
    fn test_replaced_busy_line_loses_slot() {
        let old = BusyLine::show("deploy", "first");
        let newer = BusyLine::show("deploy", "second");
        assert!(!old.is_current());
        drop(old);
        assert!(newer.is_current());
    }

    #[test]
    fn test_release_only_clears_owner() {
        let mut slot = Some((7, "second".to_string()));

        // A stale handle leaves the newer line in place.
        assert!(!release(&mut slot, 3));
        assert_eq!(slot, Some((7, "second".to_string())));

        assert!(release(&mut slot, 7));
        assert_eq!(slot, None);
        assert!(!release(&mut slot, 7));
    }
}
