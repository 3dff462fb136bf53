//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub mod types;

pub use types::{CompositorSettings, LoggingConfig};

use crate::compositor::{BackendKind, BackendPreference};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Compositor selection configuration
    #[serde(default)]
    pub compositor: CompositorSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, falling back to defaults when the file
    /// is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Validate backend choice
        match self.compositor.backend.as_str() {
            "auto" => {}
            name if BackendKind::from_config_name(name).is_some() => {}
            other => anyhow::bail!("Invalid compositor backend: {}", other),
        }

        // Validate log level
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => anyhow::bail!("Invalid log level: {}", other),
        }

        // Validate log format
        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            other => anyhow::bail!("Invalid log format: {}", other),
        }

        Ok(())
    }

    /// Override config with CLI arguments
    pub fn with_overrides(mut self, backend: Option<String>) -> Self {
        if let Some(backend) = backend {
            self.compositor.backend = backend;
        }
        self
    }

    /// Map the configured backend string to a selection preference.
    ///
    /// Assumes [`validate`](Self::validate) has run; an unknown name at this
    /// point degrades to `Auto` with a warning rather than aborting playback.
    pub fn backend_preference(&self) -> BackendPreference {
        let name = self.compositor.backend.as_str();
        if name.eq_ignore_ascii_case("auto") {
            return BackendPreference::Auto;
        }
        match BackendKind::from_config_name(name) {
            Some(kind) => BackendPreference::Force(kind),
            None => {
                warn!("Unknown compositor backend '{}', using auto", name);
                BackendPreference::Auto
            }
        }
    }
}
