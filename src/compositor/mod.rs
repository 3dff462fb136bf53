//! Compositor backend selection for the video surface.
//!
//! A media player GUI needs a compositing backend that blends the video
//! plane with the interface. Which backend works depends on the host
//! platform, the build configuration, and what actually initializes at
//! runtime, so the compositor is picked once at GUI bring-up by walking a
//! static preference list and keeping the first backend whose probe
//! succeeds.
//!
//! # Architecture
//!
//! ```text
//! CompositorSelector
//!   ├─> registry        (platform-filtered candidate list, static order)
//!   ├─> candidate probe (construct → init → keep or drop)
//!   └─> baseline        (software fallback, cannot fail)
//! ```
//!
//! # Guarantees
//!
//! - Selection is total: the caller always receives a fully initialized
//!   backend, at worst the baseline.
//! - First-success-wins: candidate order is fixed at build time and never
//!   re-ranked at runtime.
//! - No leaks: a candidate that fails its probe is dropped in full before
//!   the next one is constructed.
//!
//! # Usage
//!
//! ```no_run
//! use vout_compositor::compositor::{self, GuiContext};
//!
//! let ctx = GuiContext::headless();
//! let backend = compositor::create_compositor(&ctx);
//! tracing::info!("video surface composited by {}", backend.name());
//! ```

pub mod backend;
pub mod baseline;
pub mod probing;
pub mod registry;
pub mod selector;
pub mod types;

#[cfg(all(windows, feature = "dcomp"))]
pub mod dcomp;
#[cfg(all(target_os = "linux", feature = "wayland"))]
pub mod wayland;
#[cfg(all(target_os = "linux", feature = "x11"))]
pub mod x11;

pub use self::backend::{BackendKind, CompositorBackend, ProbeError};
pub use self::baseline::BaselineCompositor;
pub use self::probing::{detect_display_server, DisplayServer};
pub use self::registry::{BackendCandidate, BackendFactory};
pub use self::selector::{create_compositor, BackendPreference, CompositorSelector};
pub use self::types::GuiContext;
