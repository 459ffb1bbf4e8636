//! Process-level state shared across commands.

mod state;

pub use state::{register_host_events, setup_shutdown_handler};
