//! Logging setup.
//!
//! Logs go to stderr; stdout carries answers and JSON output. A bare level
//! such as `debug` applies to the assistant's own crates while the HTTP stack
//! stays at `warn`, so `--verbose` shows retrieval steps instead of socket
//! chatter. Full directives (anything with `=` or `,`) are used as given.
//!
//! `RUST_LOG` and `NO_COLOR` are resolved by [`crate::AppConfig::load`] and
//! arrive here as arguments.

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Filter used when no level is configured.
const DEFAULT_LEVEL: &str = "warn";

/// Dependency targets held at `warn` under a bare level.
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls"];

/// Expand a configured level into `EnvFilter` directives.
pub fn filter_directives(log_level: Option<&str>) -> String {
    let level = log_level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL);

    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    std::iter::once(level.to_string())
        .chain(QUIET_TARGETS.iter().map(|target| format!("{}=warn", target)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global stderr subscriber.
///
/// # Example
/// ```no_run
/// use infohub_core::logging::init_logging;
///
/// init_logging(Some("debug"), true).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let directives = filter_directives(log_level);
    let filter = EnvFilter::try_new(&directives)
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", directives, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))
}
