//! Tracing subscriber setup for the binary.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Maps `-v` occurrences to the crate log level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the crate logs at the level picked by `verbose`.
/// Stdout is left to the status-line stream. Calling this twice is a no-op.
pub fn init_logging(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,lunar_charge_sim={}",
            level.as_str().to_lowercase()
        ))
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
