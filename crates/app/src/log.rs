use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(env_filter(verbose, rust_log.as_deref()))
        .init();
}

/// Filter from `rust_log` when it parses, else this workspace's crates at the
/// verbosity level.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            EnvFilter::new(format!("app={level},services={level},finance_core={level}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn default_level_follows_verbosity() {
        assert_eq!(env_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_can_raise_the_level() {
        let filter = env_filter(false, Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = env_filter(false, Some("services=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn unparsable_rust_log_falls_back() {
        let filter = env_filter(true, Some("services=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
