//! Backend capability contract.
//!
//! Every compositing backend, accelerated or not, satisfies the same
//! three-part contract:
//!
//! 1. A constructor taking the [`GuiContext`](super::GuiContext) (expressed
//!    as the candidate factory in the registry),
//! 2. an initialization probe ([`CompositorBackend::init`]) that reports
//!    whether the backend can actually operate on this host,
//! 3. a release path that frees everything acquired during construction or a
//!    partial probe — which in this crate is simply `Drop`, so a failed
//!    candidate cannot leak on any return path.
//!
//! The selector owns the probe/fallback protocol; backends only answer the
//! question "can you composite here?".

use std::fmt;

/// Identity of a compositing backend.
///
/// Variants exist on every platform; which of them are *registered* as
/// candidates is decided at build time by the registry. Order of capability
/// is expressed by registry order, not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Windows DirectComposition (accelerated, flicker-free embedding).
    DirectComposition,
    /// Wayland subsurface composition (accelerated, Linux).
    Wayland,
    /// X11 render composition (accelerated, Linux).
    X11,
    /// Software composition through ordinary toolkit painting.
    ///
    /// No platform requirements; contracted to always initialize.
    Baseline,
}

impl BackendKind {
    /// Short machine-readable name, also accepted in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DirectComposition => "dcomp",
            Self::Wayland => "wayland",
            Self::X11 => "x11",
            Self::Baseline => "baseline",
        }
    }

    /// Parse a configuration backend name. `"auto"` is not a kind and is
    /// handled by the caller.
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dcomp" => Some(Self::DirectComposition),
            "wayland" => Some(Self::Wayland),
            "x11" => Some(Self::X11),
            "baseline" | "dummy" => Some(Self::Baseline),
            _ => None,
        }
    }

    /// All backend kinds, most capable first.
    pub const fn all() -> &'static [Self] {
        &[
            Self::DirectComposition,
            Self::Wayland,
            Self::X11,
            Self::Baseline,
        ]
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A live compositing backend instance.
///
/// Returned instances are exclusively owned by the caller; the selector keeps
/// no back-reference. An instance whose probe failed is never returned.
pub trait CompositorBackend {
    /// Initialization probe.
    ///
    /// Invoked exactly once by the selector, right after construction. A
    /// failure is expected and non-fatal: the selector drops the instance and
    /// tries the next candidate. Implementations must leave nothing behind on
    /// failure beyond what their `Drop` releases.
    fn init(&mut self) -> Result<(), ProbeError>;

    /// Which candidate this instance was created from.
    fn kind(&self) -> BackendKind;

    /// Whether the probe has run and succeeded.
    fn is_initialized(&self) -> bool;

    /// Human-readable backend name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Probe failures.
///
/// These never escape the selector; they exist so fallback decisions get
/// logged with a reason instead of a bare boolean.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The interface context carries no rendering surface and the session
    /// environment does not indicate this backend's display server either.
    #[error("no rendering surface in the interface context")]
    SurfaceUnavailable,

    /// The display server this backend needs is not reachable.
    #[error("display server unavailable: {0}")]
    DisplayUnavailable(String),

    /// The supplied window handle belongs to a different windowing system.
    #[error("surface rejected: {0}")]
    SurfaceRejected(String),

    /// The platform is present but lacks a capability the backend requires
    /// (e.g. a missing driver feature).
    #[error("required capability missing: {0}")]
    MissingCapability(&'static str),
}
