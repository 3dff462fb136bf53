//! Compositor selection and fallback protocol.
//!
//! A single-shot, synchronous decision made once during GUI bring-up on the
//! main thread: walk the candidate preference list, return the first backend
//! whose probe succeeds, and fall back to the baseline otherwise. The
//! operation is total by construction because the baseline has no
//! precondition that can be false.
//!
//! Failed candidates are uniquely owned for the duration of their attempt and
//! dropped before the next candidate is constructed, so a probe failure can
//! never leak a half-initialized backend.

use tracing::{debug, info, warn};

use super::backend::{BackendKind, CompositorBackend};
use super::registry::{self, BackendCandidate};
use super::types::GuiContext;

/// How the caller wants the candidate walk restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Walk the full preference list, most capable first.
    #[default]
    Auto,
    /// Try only the named backend, then the baseline.
    ///
    /// A forced backend that fails its probe degrades straight to the
    /// baseline; it does not resume the automatic walk. Whoever asked for a
    /// specific backend should get predictable degradation, not a silently
    /// different accelerated one.
    Force(BackendKind),
}

/// Produces exactly one initialized compositing backend.
pub struct CompositorSelector {
    candidates: Vec<BackendCandidate>,
    baseline: BackendCandidate,
}

impl CompositorSelector {
    /// Selector over the backends compiled in for this platform.
    pub fn new() -> Self {
        Self::with_candidates(
            registry::accelerated_candidates(),
            registry::baseline_candidate(),
        )
    }

    /// Selector over an explicit candidate list (test seam).
    ///
    /// `baseline` is the terminal candidate and must honor the baseline
    /// contract: its probe never fails.
    pub fn with_candidates(candidates: Vec<BackendCandidate>, baseline: BackendCandidate) -> Self {
        Self {
            candidates,
            baseline,
        }
    }

    /// Select and initialize a compositing backend for `ctx`.
    ///
    /// First-success-wins: candidates are probed in preference order and the
    /// walk stops at the first success, even if a later candidate would also
    /// succeed. Per-candidate failures are internal; the call as a whole
    /// cannot fail, and the returned instance is always fully initialized and
    /// exclusively owned by the caller.
    pub fn create_compositor(&self, ctx: &GuiContext) -> Box<dyn CompositorBackend> {
        self.create_with_preference(ctx, BackendPreference::Auto)
    }

    /// [`create_compositor`](Self::create_compositor) with a preference
    /// restriction, typically derived from configuration.
    pub fn create_with_preference(
        &self,
        ctx: &GuiContext,
        preference: BackendPreference,
    ) -> Box<dyn CompositorBackend> {
        match preference {
            BackendPreference::Auto => {
                for candidate in &self.candidates {
                    if let Some(backend) = self.try_candidate(candidate, ctx) {
                        return backend;
                    }
                }
            }
            BackendPreference::Force(BackendKind::Baseline) => {
                debug!("baseline backend forced, skipping accelerated candidates");
            }
            BackendPreference::Force(kind) => {
                match self.candidates.iter().find(|c| c.kind() == kind) {
                    Some(candidate) => {
                        if let Some(backend) = self.try_candidate(candidate, ctx) {
                            return backend;
                        }
                    }
                    None => {
                        warn!(
                            "requested compositor backend '{}' is not compiled in for this platform",
                            kind
                        );
                    }
                }
            }
        }

        // Terminal candidate. The baseline has no initialization precondition
        // that can be false; the probe is invoked so the instance records it,
        // but the selector does not branch on the result.
        let mut backend = self.baseline.construct(ctx);
        let probed = backend.init();
        debug_assert!(
            probed.is_ok(),
            "baseline compositor violated its no-fail contract"
        );
        info!("selected compositor backend: {}", backend.name());
        backend
    }

    /// Construct and probe one candidate. On failure the instance is dropped
    /// in full before returning, so the next attempt starts clean.
    fn try_candidate(
        &self,
        candidate: &BackendCandidate,
        ctx: &GuiContext,
    ) -> Option<Box<dyn CompositorBackend>> {
        debug!("probing compositor backend: {}", candidate.kind());
        let mut backend = candidate.construct(ctx);
        match backend.init() {
            Ok(()) => {
                info!("selected compositor backend: {}", backend.name());
                Some(backend)
            }
            Err(err) => {
                warn!(
                    "compositor backend {} failed to initialize: {}",
                    candidate.kind(),
                    err
                );
                drop(backend);
                None
            }
        }
    }

    /// Kinds this selector will consider, in probe order, baseline last.
    pub fn candidate_kinds(&self) -> Vec<BackendKind> {
        let mut kinds: Vec<BackendKind> =
            self.candidates.iter().map(BackendCandidate::kind).collect();
        kinds.push(self.baseline.kind());
        kinds
    }
}

impl Default for CompositorSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point: selection over the platform registry with no
/// preference restriction.
pub fn create_compositor(ctx: &GuiContext) -> Box<dyn CompositorBackend> {
    CompositorSelector::new().create_compositor(ctx)
}
