use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Picks `RUST_LOG` when set, else [`DEFAULT_LOG_FILTER`].
pub fn log_filter(from_env: Option<String>) -> String {
    from_env
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Installs the global subscriber. actix-web's `log` records reach it through
/// the `tracing-log` bridge.
pub fn init() {
    let filter = log_filter(std::env::var("RUST_LOG").ok());

    tracing_subscriber::registry()
        .with(EnvFilter::new(&filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
