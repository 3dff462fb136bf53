//! Selection/fallback integration tests
//!
//! Exercises the public surface against the real platform registry. These
//! tests must pass on any host (CI containers included), so they assert
//! totality and ownership properties rather than which accelerated backend a
//! particular desktop session yields.

use vout_compositor::compositor::registry;
use vout_compositor::config::Config;
use vout_compositor::{
    create_compositor, BackendKind, BackendPreference, CompositorSelector, GuiContext,
};

#[test]
fn test_selection_is_total_on_any_host() {
    let backend = create_compositor(&GuiContext::headless());
    assert!(backend.is_initialized());
    assert!(registry::compiled_backends().contains(&backend.kind()));
}

#[test]
fn test_forced_baseline_always_honored() {
    let selector = CompositorSelector::new();
    let backend = selector.create_with_preference(
        &GuiContext::headless(),
        BackendPreference::Force(BackendKind::Baseline),
    );
    assert_eq!(backend.kind(), BackendKind::Baseline);
    assert!(backend.is_initialized());
}

#[test]
fn test_repeated_selection_with_independent_contexts() {
    let selector = CompositorSelector::new();
    let first = selector.create_compositor(&GuiContext::headless());
    let first_kind = first.kind();
    drop(first);

    // A second session must walk the list from the top and reach the same
    // decision; nothing from the first call sticks to the selector.
    let second = selector.create_compositor(&GuiContext::headless());
    assert_eq!(second.kind(), first_kind);
    assert!(second.is_initialized());
}

#[test]
fn test_selector_candidate_order_matches_registry() {
    let selector = CompositorSelector::new();
    assert_eq!(selector.candidate_kinds(), registry::compiled_backends());
}

#[test]
fn test_config_file_drives_preference() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp config file");
    writeln!(file, "[compositor]\nbackend = \"baseline\"").expect("write config");

    let config = Config::load(file.path()).expect("load config");
    assert_eq!(
        config.backend_preference(),
        BackendPreference::Force(BackendKind::Baseline)
    );

    let selector = CompositorSelector::new();
    let backend =
        selector.create_with_preference(&GuiContext::headless(), config.backend_preference());
    assert_eq!(backend.kind(), BackendKind::Baseline);
}

#[test]
fn test_config_rejects_unknown_backend_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp config file");
    writeln!(file, "[compositor]\nbackend = \"vulkan\"").expect("write config");

    assert!(Config::load(file.path()).is_err());
}
