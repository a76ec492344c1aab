//! tracing setup. Diagnostics go to stderr so command output stays parseable.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Calling it twice is harmless.
pub fn enable_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={default_level}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
