//! Logging setup utilities for the city explorer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are enabled by the default filter.
const LOGGED_CRATES: [&str; 3] = ["machi_shared", "machi_explorer", "machi_cli"];

/// Build the default `EnvFilter` directive string.
///
/// Every workspace crate plus the binary itself gets `default_log_level`.
pub fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    LOGGED_CRATES
        .iter()
        .copied()
        .chain(std::iter::once(binary_name))
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "machi")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn")
///
/// # Examples
///
/// ```no_run
/// use machi_shared::logger::setup_logger;
///
/// setup_logger("machi", "warn");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
