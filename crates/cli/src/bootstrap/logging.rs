use ferrous_rdns_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries lookup results only.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
