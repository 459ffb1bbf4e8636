//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! scale = 0     # 0 logical, 1 native, other positive values custom
//! ```

use serde::{Deserialize, Serialize};

use crate::launch::ResolutionScale;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Resolution scale handed to the renderer.
    pub scale: ResolutionScale,
}
