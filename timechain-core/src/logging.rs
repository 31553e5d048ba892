use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::config::ChainConfig;
use crate::errors::{Result, TimeChainError};

/// Initializes the default tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`; without either, `info` is used.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let default_level = level.unwrap_or("info");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .try_init()
        .map_err(|err| TimeChainError::LoggingError(err.to_string()))?;

    Ok(())
}

/// Installs the subscriber using the log level carried by `config`.
pub fn init_from_config(config: &ChainConfig) -> Result<()> {
    init_tracing(config.log_level())
}
