//! Diagnostic logging setup
//!
//! Library code only emits `tracing` events. The binary installs a subscriber
//! that writes them to stderr, keeping stdout for command output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then `directive`, then [`DEFAULT_FILTER`].
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(directive: Option<&str>) {
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(build_filter(directive))
        .try_init();
    if result.is_err() {
        tracing::trace!("logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(Some("demokit=loud"));
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_directive_is_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(Some("demokit=debug"));
        assert!(filter.to_string().contains("demokit=debug"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Some("warn"));
        init(Some("debug"));
    }
}
