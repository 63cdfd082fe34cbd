use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so stdout carries only lesson text. Safe to call twice.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
