//! Backend candidate registry.
//!
//! The registry is the single place that knows which compositing backends are
//! compiled in for this platform and build configuration, and in which order
//! they should be probed. The selection algorithm itself stays free of
//! platform conditionals; it just walks whatever this module hands it.
//!
//! Ordering is static, most capable first. The baseline is not part of the
//! accelerated list: it is the guaranteed terminal fallback and is exposed
//! separately via [`baseline_candidate`].

use std::fmt;

use super::backend::{BackendKind, CompositorBackend};
use super::baseline::BaselineCompositor;
use super::types::GuiContext;

/// Constructor for one backend candidate.
///
/// Factories are cheap and side-effect free; all real work happens in the
/// instance's probe. Every call constructs a fresh instance, so one call's
/// probe failure cannot leak state into the next selection.
pub type BackendFactory = Box<dyn Fn(&GuiContext) -> Box<dyn CompositorBackend> + Send + Sync>;

/// One entry in the candidate preference list.
pub struct BackendCandidate {
    kind: BackendKind,
    factory: BackendFactory,
}

impl BackendCandidate {
    /// Create a candidate from a kind and its constructor.
    pub fn new<F>(kind: BackendKind, factory: F) -> Self
    where
        F: Fn(&GuiContext) -> Box<dyn CompositorBackend> + Send + Sync + 'static,
    {
        Self {
            kind,
            factory: Box::new(factory),
        }
    }

    /// Which backend this candidate constructs.
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Instantiate the backend for the given context. The probe is the
    /// caller's job.
    pub fn construct(&self, ctx: &GuiContext) -> Box<dyn CompositorBackend> {
        (self.factory)(ctx)
    }
}

impl fmt::Debug for BackendCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendCandidate")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Accelerated candidates compiled in for this platform, most capable first.
///
/// May be empty (e.g. all acceleration features disabled); selection then
/// goes straight to the baseline.
pub fn accelerated_candidates() -> Vec<BackendCandidate> {
    #[allow(unused_mut)]
    let mut candidates = Vec::new();

    #[cfg(all(windows, feature = "dcomp"))]
    candidates.push(BackendCandidate::new(
        BackendKind::DirectComposition,
        |ctx: &GuiContext| {
            Box::new(super::dcomp::DcompCompositor::new(ctx)) as Box<dyn CompositorBackend>
        },
    ));

    #[cfg(all(target_os = "linux", feature = "wayland"))]
    candidates.push(BackendCandidate::new(
        BackendKind::Wayland,
        |ctx: &GuiContext| {
            Box::new(super::wayland::WaylandCompositor::new(ctx)) as Box<dyn CompositorBackend>
        },
    ));

    #[cfg(all(target_os = "linux", feature = "x11"))]
    candidates.push(BackendCandidate::new(BackendKind::X11, |ctx: &GuiContext| {
        Box::new(super::x11::X11Compositor::new(ctx)) as Box<dyn CompositorBackend>
    }));

    candidates
}

/// The terminal fallback candidate. Always available, never fails its probe.
pub fn baseline_candidate() -> BackendCandidate {
    BackendCandidate::new(BackendKind::Baseline, |ctx: &GuiContext| {
        Box::new(BaselineCompositor::new(ctx)) as Box<dyn CompositorBackend>
    })
}

/// Kinds compiled in for this build, in probe order, baseline last.
///
/// Purely informational (diagnostics, logging); selection consults the
/// candidates themselves.
pub fn compiled_backends() -> Vec<BackendKind> {
    let mut kinds: Vec<BackendKind> = accelerated_candidates()
        .iter()
        .map(BackendCandidate::kind)
        .collect();
    kinds.push(BackendKind::Baseline);
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerated_list_excludes_baseline() {
        for candidate in accelerated_candidates() {
            assert_ne!(candidate.kind(), BackendKind::Baseline);
        }
    }

    #[test]
    fn test_accelerated_order_follows_capability_order() {
        // Registry order must be a subsequence of the global capability order.
        let order = BackendKind::all();
        let mut last_index = 0;
        for candidate in accelerated_candidates() {
            let index = order
                .iter()
                .position(|k| *k == candidate.kind())
                .expect("registered kind missing from capability order");
            assert!(index >= last_index, "registry order disagrees with capability order");
            last_index = index;
        }
    }

    #[test]
    fn test_baseline_candidate_probe_succeeds() {
        let candidate = baseline_candidate();
        assert_eq!(candidate.kind(), BackendKind::Baseline);
        let mut backend = candidate.construct(&GuiContext::headless());
        assert!(backend.init().is_ok());
        assert!(backend.is_initialized());
    }

    #[test]
    fn test_compiled_backends_ends_with_baseline() {
        let kinds = compiled_backends();
        assert_eq!(kinds.last(), Some(&BackendKind::Baseline));
        // Baseline appears exactly once.
        assert_eq!(
            kinds.iter().filter(|k| **k == BackendKind::Baseline).count(),
            1
        );
    }

    #[cfg(all(target_os = "linux", feature = "wayland", feature = "x11"))]
    #[test]
    fn test_linux_registry_prefers_wayland_over_x11() {
        let kinds: Vec<BackendKind> = accelerated_candidates()
            .iter()
            .map(BackendCandidate::kind)
            .collect();
        let wayland = kinds
            .iter()
            .position(|k| *k == BackendKind::Wayland)
            .expect("wayland candidate registered");
        let x11 = kinds
            .iter()
            .position(|k| *k == BackendKind::X11)
            .expect("x11 candidate registered");
        assert!(wayland < x11, "wayland must be probed before x11");
    }
}
