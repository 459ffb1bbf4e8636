//! Rendering surface seam.
//!
//! The surface itself (native library loading, graphics context, frame
//! loop) lives outside this crate. The coordinator only constructs it once
//! the asset tree is in place and relays pause/resume.

use std::path::{Path, PathBuf};

use super::ResolutionScale;
use crate::log;

/// What the renderer is told about its host at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    files_dir: PathBuf,
    deployment_root: PathBuf,
}

impl HostContext {
    pub fn new(files_dir: impl Into<PathBuf>, deployment_root: impl Into<PathBuf>) -> Self {
        Self {
            files_dir: files_dir.into(),
            deployment_root: deployment_root.into(),
        }
    }

    /// App-private files directory.
    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    /// Directory holding the mirrored asset tree. Read-only for renderers.
    pub fn deployment_root(&self) -> &Path {
        &self.deployment_root
    }
}

/// A constructed rendering surface.
pub trait Renderer {
    fn on_resume(&mut self);
    fn on_pause(&mut self);
}

/// Builds the renderer once deployment has finished.
pub trait RendererFactory {
    fn create(&mut self, host: &HostContext, scale: ResolutionScale) -> Box<dyn Renderer>;
}

impl<F> RendererFactory for F
where
    F: FnMut(&HostContext, ResolutionScale) -> Box<dyn Renderer>,
{
    fn create(&mut self, host: &HostContext, scale: ResolutionScale) -> Box<dyn Renderer> {
        self(host, scale)
    }
}

// ============================================================================
// Headless renderer
// ============================================================================

/// Renderer without a surface: reports its lifecycle to the log.
#[derive(Debug)]
pub struct HeadlessRenderer {
    root: PathBuf,
    scale: ResolutionScale,
    running: bool,
}

impl HeadlessRenderer {
    pub fn new(host: &HostContext, scale: ResolutionScale) -> Self {
        log!(
            "render";
            "surface created ({} scale), assets at {} in {}",
            scale,
            host.deployment_root().display(),
            host.files_dir().display()
        );
        Self {
            root: host.deployment_root().to_path_buf(),
            scale,
            running: false,
        }
    }

    /// Factory for [`LaunchCoordinator`](super::LaunchCoordinator).
    pub fn factory() -> impl RendererFactory {
        |host: &HostContext, scale: ResolutionScale| -> Box<dyn Renderer> {
            Box::new(HeadlessRenderer::new(host, scale))
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scale(&self) -> ResolutionScale {
        self.scale
    }
}

impl Renderer for HeadlessRenderer {
    fn on_resume(&mut self) {
        if !self.running {
            self.running = true;
            log!("render"; "resumed ({})", self.root.display());
        }
    }

    fn on_pause(&mut self) {
        if self.running {
            self.running = false;
            log!("render"; "paused");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_pause_resume() {
        let host = HostContext::new("/files", "/files/pge");
        let mut renderer = HeadlessRenderer::new(&host, ResolutionScale::Native);
        assert!(!renderer.is_running());

        renderer.on_resume();
        assert!(renderer.is_running());
        renderer.on_resume();
        assert!(renderer.is_running());

        renderer.on_pause();
        assert!(!renderer.is_running());
        assert_eq!(renderer.scale(), ResolutionScale::Native);
    }

    #[test]
    fn test_host_context_paths() {
        let host = HostContext::new("/data/files", "/data/files/pge");
        assert_eq!(host.files_dir(), Path::new("/data/files"));
        assert_eq!(host.deployment_root(), Path::new("/data/files/pge"));
        assert!(host.deployment_root().starts_with(host.files_dir()));
    }

    #[test]
    fn test_closure_factory() {
        let mut seen = None;
        let mut factory = |host: &HostContext, scale: ResolutionScale| -> Box<dyn Renderer> {
            seen = Some((host.deployment_root().to_path_buf(), scale));
            Box::new(HeadlessRenderer::new(host, scale))
        };

        let host = HostContext::new("/f", "/f/pge");
        let _renderer = factory.create(&host, ResolutionScale::Custom(2.0));
        drop(factory);

        assert_eq!(
            seen,
            Some((PathBuf::from("/f/pge"), ResolutionScale::Custom(2.0)))
        );
    }
}
