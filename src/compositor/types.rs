//! Shared value types for the compositor subsystem.

use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

/// Opaque interface context handed to every backend candidate.
///
/// The context carries whatever the hosting GUI toolkit can provide about the
/// window that will receive the video surface. The selector passes it through
/// unmodified and never dereferences the handles; candidates only inspect the
/// handle *variant* during their probe. Validity of the handles is the
/// caller's responsibility.
///
/// A context without a window handle is valid: candidates then probe against
/// the session environment instead. This is what the `vout-compositor-probe`
/// binary does to report which backend a real window would get.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuiContext {
    window: Option<RawWindowHandle>,
    display: Option<RawDisplayHandle>,
}

impl GuiContext {
    /// Context with no rendering surface (diagnostics, tests).
    pub fn headless() -> Self {
        Self::default()
    }

    /// Context for a live toolkit window.
    pub fn for_window(window: RawWindowHandle, display: RawDisplayHandle) -> Self {
        Self {
            window: Some(window),
            display: Some(display),
        }
    }

    /// The host window handle, if the toolkit provided one.
    pub fn window(&self) -> Option<RawWindowHandle> {
        self.window
    }

    /// The host display/connection handle, if the toolkit provided one.
    pub fn display(&self) -> Option<RawDisplayHandle> {
        self.display
    }

    /// Whether the context carries a rendering surface at all.
    pub fn has_surface(&self) -> bool {
        self.window.is_some()
    }
}
