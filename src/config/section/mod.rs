//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pge.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `deploy` | `[deploy]`   | Asset source, destination, buffer    |
//! | `render` | `[render]`   | Renderer resolution scale            |

mod deploy;
mod render;

pub use deploy::DeployConfig;
pub use render::RenderConfig;
