use tracing_subscriber::EnvFilter;

use crate::config::ShellConfig;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Records go to stderr so they never mix
/// with child output on stdout.
pub fn init(config: &ShellConfig) {
    let filter = EnvFilter::try_from_env(&config.log_env)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Couldn't initialise logging: {}", e);
    }
}
