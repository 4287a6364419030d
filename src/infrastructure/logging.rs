use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
