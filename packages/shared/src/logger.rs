//! Logging setup utilities for the noteroom workspace.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The default applies to every crate in the workspace; it can be overridden
/// per target using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use noteroom_shared::logger::setup_logger;
///
/// setup_logger("info");
/// ```
pub fn setup_logger(default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Logger initialized with default level '{}'", default_log_level);
}
