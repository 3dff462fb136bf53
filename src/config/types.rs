//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Compositor selection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositorSettings {
    /// Backend to use: "auto" walks the preference list; "dcomp", "wayland",
    /// "x11" or "baseline" forces one backend (falling back to baseline if
    /// its probe fails).
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl Default for CompositorSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

fn default_backend() -> String {
    "auto".to_string()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: pretty, compact, json
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
