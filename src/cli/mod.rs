//! Command-line interface module.

mod args;
pub mod deploy;
pub mod run;

pub use args::{Cli, Commands, DeployArgs};
