use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    /// Installs the stderr subscriber. `RUST_LOG` wins over `--debug` when set.
    pub fn init(debug: bool) {
        LOGGER.get_or_init(|| {
            let default_level = if debug { "debug" } else { "warn" };
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level));

            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(debug)
                .without_time()
                .try_init();

            Logger { debug }
        });
    }

    pub fn is_debug() -> bool {
        LOGGER.get().is_some_and(|logger| logger.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        Logger::init(true);
        Logger::init(false);
        assert!(Logger::is_debug());
        tracing::debug!("logger ready");
    }
}
