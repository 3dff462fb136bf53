//! Baseline (software) compositing backend.
//!
//! The terminal entry of the fallback chain. Video frames are painted through
//! the toolkit's ordinary paint path with no platform compositing involved,
//! so this backend has no initialization precondition that can be false. The
//! whole totality guarantee of [`CompositorSelector`] rests on that contract.
//!
//! [`CompositorSelector`]: super::CompositorSelector

use tracing::{debug, info};

use super::backend::{BackendKind, CompositorBackend, ProbeError};
use super::types::GuiContext;

/// Software composition through toolkit painting.
pub struct BaselineCompositor {
    headless: bool,
    initialized: bool,
}

impl BaselineCompositor {
    /// Construct for the given interface context.
    pub fn new(ctx: &GuiContext) -> Self {
        Self {
            headless: !ctx.has_surface(),
            initialized: false,
        }
    }
}

impl CompositorBackend for BaselineCompositor {
    fn init(&mut self) -> Result<(), ProbeError> {
        if self.headless {
            debug!("baseline compositor initializing without a surface");
        }
        self.initialized = true;
        info!("baseline compositor ready (software composition)");
        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Baseline
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_initializes_headless() {
        let mut backend = BaselineCompositor::new(&GuiContext::headless());
        assert!(!backend.is_initialized());
        assert!(backend.init().is_ok());
        assert!(backend.is_initialized());
        assert_eq!(backend.kind(), BackendKind::Baseline);
    }
}
