//! Wayland subsurface compositing candidate (Linux).
//!
//! Places the video surface on a `wl_subsurface` below the interface, letting
//! the session compositor do the blending. The probe only establishes that a
//! Wayland surface (or at least a Wayland session) is actually there; surface
//! creation and frame delivery belong to the render pipeline, not to
//! selection.

use raw_window_handle::RawWindowHandle;
use tracing::{debug, info};

use super::backend::{BackendKind, CompositorBackend, ProbeError};
use super::probing::{self, DisplayServer};
use super::types::GuiContext;

/// Wayland subsurface composition.
pub struct WaylandCompositor {
    ctx: GuiContext,
    initialized: bool,
}

impl WaylandCompositor {
    /// Construct for the given interface context.
    pub fn new(ctx: &GuiContext) -> Self {
        Self {
            ctx: *ctx,
            initialized: false,
        }
    }
}

impl CompositorBackend for WaylandCompositor {
    fn init(&mut self) -> Result<(), ProbeError> {
        match self.ctx.window() {
            Some(RawWindowHandle::Wayland(_)) => {
                debug!("wayland compositor: host window is a wl_surface");
            }
            Some(other) => {
                return Err(ProbeError::SurfaceRejected(format!(
                    "host window is not a Wayland surface ({:?})",
                    other
                )));
            }
            None => match probing::detect_display_server() {
                DisplayServer::Wayland => {
                    debug!("wayland compositor: probing by session environment");
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
        info!("wayland compositor ready (subsurface composition)");
        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Wayland
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}
