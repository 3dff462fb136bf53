//! Session environment probing.
//!
//! Identifies which display server the current session runs, for candidates
//! probing without a live window handle and for the diagnostic binary.
//!
//! Detection order:
//! 1. `XDG_SESSION_TYPE` (most standardized)
//! 2. `WAYLAND_DISPLAY`
//! 3. `DISPLAY`
//! 4. Fall back to Unknown

use std::fmt;
use tracing::debug;

/// Display server the session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    /// A Wayland session.
    Wayland,
    /// An X11 session (or XWayland reached through `DISPLAY` only).
    X11,
    /// No graphical session identified.
    Unknown,
}

impl fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wayland => "wayland",
            Self::X11 => "x11",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Identify the session's display server from the environment.
pub fn detect_display_server() -> DisplayServer {
    let server = classify(
        env_nonempty("XDG_SESSION_TYPE").as_deref(),
        env_nonempty("WAYLAND_DISPLAY").as_deref(),
        env_nonempty("DISPLAY").as_deref(),
    );
    debug!("session display server: {}", server);
    server
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Pure classification, separated from environment reads for testability.
fn classify(
    session_type: Option<&str>,
    wayland_display: Option<&str>,
    x11_display: Option<&str>,
) -> DisplayServer {
    if let Some(session) = session_type {
        if session.eq_ignore_ascii_case("wayland") {
            return DisplayServer::Wayland;
        }
        if session.eq_ignore_ascii_case("x11") {
            return DisplayServer::X11;
        }
        // "tty", "mir", unset-but-empty: fall through to socket variables.
    }

    if wayland_display.is_some() {
        return DisplayServer::Wayland;
    }
    if x11_display.is_some() {
        return DisplayServer::X11;
    }

    DisplayServer::Unknown
}
