//! # vout-compositor
//!
//! Compositor backend selection for a media player's video surface.
//!
//! The GUI shell asks this crate, once at bring-up, for the best compositing
//! backend the host can actually run. Candidates are ordered most capable
//! first and filtered at build time per platform; each is constructed with
//! the hosting window context and probed, and the first one that initializes
//! wins. A software baseline with no platform requirements terminates the
//! chain, so the caller always gets a working backend.
//!
//! # Architecture
//!
//! ```text
//! GUI shell
//!   └─> CompositorSelector::create_compositor(GuiContext)
//!         ├─> dcomp     (Windows, DirectComposition)    ─┐
//!         ├─> wayland   (Linux, subsurface composition)  ├─ probed in order,
//!         ├─> x11       (Linux, render composition)     ─┘  first success wins
//!         └─> baseline  (software, cannot fail)
//! ```
//!
//! Failed probes are internal: the instance is dropped in full and the next
//! candidate is tried. The only caller-visible symptom of an upstream
//! failure is degraded composition quality.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Compositor selection core: capability contract, candidate registry,
/// selector, and the backend candidates themselves.
pub mod compositor;

/// Configuration loading, validation, and CLI overrides
pub mod config;

pub use compositor::{
    create_compositor, BackendKind, BackendPreference, CompositorBackend, CompositorSelector,
    GuiContext, ProbeError,
};
