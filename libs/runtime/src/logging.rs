use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber from the logging config.
///
/// `RUST_LOG` takes precedence over the configured level so operators can
/// raise verbosity for a single run without touching config files.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    let result = if config.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        let cfg = LoggingConfig {
            level: "debug".into(),
            format: "text".into(),
        };
        init_logging(&cfg);
        init_logging(&cfg);
    }
}
