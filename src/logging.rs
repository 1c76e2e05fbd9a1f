//! Tracing subscriber setup.

use crate::config::Settings;
use tracing_subscriber::EnvFilter;

/// Install the stderr fmt subscriber. Calling it twice is a no-op.
pub fn init(settings: &Settings) {
    let filter = settings
        .log_level
        .as_deref()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
