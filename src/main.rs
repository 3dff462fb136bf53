//! vout-compositor-probe
//!
//! Diagnostic tool: reports which compositing backend a player window would
//! get on this host, and why the more capable candidates were skipped.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use vout_compositor::compositor::{self, registry, GuiContext};
use vout_compositor::config::Config;

/// Command-line arguments for vout-compositor-probe
#[derive(Parser, Debug)]
#[command(name = "vout-compositor-probe")]
#[command(version, about = "Report the compositor backend selected on this host", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "vout-compositor.toml")]
    config: PathBuf,

    /// Backend override (auto|dcomp|wayland|x11|baseline)
    #[arg(short, long, env = "VOUT_COMPOSITOR_BACKEND")]
    backend: Option<String>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, default_value = "pretty")]
    log_format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    info!("vout-compositor-probe v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default(&args.config).with_overrides(args.backend.clone());
    config.validate()?;

    info!(
        "session display server: {}",
        compositor::detect_display_server()
    );
    let compiled: Vec<String> = registry::compiled_backends()
        .iter()
        .map(|kind| kind.to_string())
        .collect();
    info!("compiled-in backends (probe order): {}", compiled.join(", "));

    // No live window here: candidates probe against the session environment,
    // which is exactly what a freshly created player window would see.
    let ctx = GuiContext::headless();
    let selector = compositor::CompositorSelector::new();
    let backend = selector.create_with_preference(&ctx, config.backend_preference());

    info!(
        "selection result: {} (initialized: {})",
        backend.name(),
        backend.is_initialized()
    );
    println!("{}", backend.name());

    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("vout_compositor={log_level},warn"))
        });

    match args.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .json()
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .compact()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .pretty()
                .init();
        }
    }

    Ok(())
}
