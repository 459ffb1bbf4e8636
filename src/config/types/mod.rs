//! Configuration utility types.
//!
//! | Module  | Purpose                          |
//! |---------|----------------------------------|
//! | `error` | ConfigError and diagnostics      |
//! | `field` | Dotted field paths for messages  |

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
