//! Logging setup for binaries embedding the trail library.
//!
//! The library itself only emits `tracing` events. Hosts that want them on
//! stderr call [`init_logging`] once at startup; `RUST_LOG` takes precedence
//! over the verbosity-derived default.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
