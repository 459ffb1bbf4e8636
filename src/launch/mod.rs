//! Launch sequencing: busy indicator, background deployment, renderer.
//!
//! ```text
//! launch/
//! ├── scale        # ResolutionScale (0 logical, 1 native, else custom)
//! ├── host         # HostEvent + HostLifecycle
//! ├── renderer     # Renderer / RendererFactory seam, HeadlessRenderer
//! ├── indicator    # BusyIndicator + ConsoleIndicator
//! ├── coordinator  # LaunchCoordinator state machine
//! └── event_loop   # interactive-thread loop
//! ```

mod coordinator;
pub mod event_loop;
mod host;
mod indicator;
mod renderer;
mod scale;

pub use coordinator::{LaunchCoordinator, LaunchState};
pub use host::{HostEvent, HostLifecycle};
pub use indicator::{BusyIndicator, ConsoleIndicator};
pub use renderer::{HeadlessRenderer, HostContext, Renderer, RendererFactory};
pub use scale::{ResolutionScale, ScaleError};
