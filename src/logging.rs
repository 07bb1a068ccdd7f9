//! Logging setup for the `tldr` binary.
//!
//! Logs go to stderr so they never mix with rendered results on stdout.
//! `TLDR_LOG` (or `RUST_LOG`) overrides the level picked from `-v` flags.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a given number of `-v` flags.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "tldr=warn",
        1 => "tldr=info",
        2 => "tldr=debug",
        _ => "tldr=trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = std::env::var("TLDR_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
