//! X11 render compositing candidate (Linux).
//!
//! Composites the video into an ARGB child window via the X render extension.
//! Less capable than the Wayland path (no compositor-side sync guarantees),
//! so it sits after it in the preference order. The probe establishes that an
//! X11 window (or session) is reachable; the extension round-trip itself
//! happens when the render pipeline attaches.

use raw_window_handle::RawWindowHandle;
use tracing::{debug, info};

use super::backend::{BackendKind, CompositorBackend, ProbeError};
use super::probing::{self, DisplayServer};
use super::types::GuiContext;

/// X11 render composition.
pub struct X11Compositor {
    ctx: GuiContext,
    initialized: bool,
}

impl X11Compositor {
    /// Construct for the given interface context.
    pub fn new(ctx: &GuiContext) -> Self {
        Self {
            ctx: *ctx,
            initialized: false,
        }
    }
}

impl CompositorBackend for X11Compositor {
    fn init(&mut self) -> Result<(), ProbeError> {
        match self.ctx.window() {
            Some(RawWindowHandle::Xlib(_) | RawWindowHandle::Xcb(_)) => {
                debug!("x11 compositor: host window is an X11 window");
            }
            Some(other) => {
                return Err(ProbeError::SurfaceRejected(format!(
                    "host window is not an X11 window ({:?})",
                    other
                )));
            }
            None => match probing::detect_display_server() {
                // XWayland makes X11 reachable from Wayland sessions too.
                DisplayServer::X11 | DisplayServer::Wayland => {
                    debug!("x11 compositor: probing by session environment");
                }
                server => {
                    return Err(ProbeError::DisplayUnavailable(format!(
                        "session reports {}",
                        server
                    )));
                }
            },
        }

        self.initialized = true;
        info!("x11 compositor ready (render composition)");
        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::X11
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw_window_handle::{RawDisplayHandle, XlibDisplayHandle, XlibWindowHandle};

    #[test]
    fn test_accepts_xlib_surface() {
        let ctx = GuiContext::for_window(
            RawWindowHandle::Xlib(XlibWindowHandle::new(0x2a)),
            RawDisplayHandle::Xlib(XlibDisplayHandle::new(None, 0)),
        );
        let mut backend = X11Compositor::new(&ctx);
        assert!(backend.init().is_ok());
        assert!(backend.is_initialized());
        assert_eq!(backend.kind(), BackendKind::X11);
    }

    #[test]
    fn test_rejects_wayland_surface() {
        use raw_window_handle::{WaylandDisplayHandle, WaylandWindowHandle};
        use std::ptr::NonNull;

        let surface = NonNull::dangling();
        let ctx = GuiContext::for_window(
            RawWindowHandle::Wayland(WaylandWindowHandle::new(surface)),
            RawDisplayHandle::Wayland(WaylandDisplayHandle::new(surface)),
        );
        let mut backend = X11Compositor::new(&ctx);
        assert!(matches!(
            backend.init(),
            Err(ProbeError::SurfaceRejected(_))
        ));
    }
}
