use thiserror::Error;

/// Result type used across the TimeChain core crate.
pub type Result<T> = std::result::Result<T, TimeChainError>;

/// Failures raised by chain manipulation.
///
/// Every variant is reported before the chain is mutated, so a caller that
/// receives one of these still holds the chain exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("chain is empty: there is no period to anchor to")]
    EmptyChain,

    #[error("index {index} out of bounds for chain of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("period at index {index} has no instant to anchor to")]
    UnanchoredPeriod { index: usize },

    #[error("period at index {index} is not adjacent to its predecessor")]
    NotContiguous { index: usize },

    #[error("period at index {index} ends before it starts")]
    ReversedPeriod { index: usize },

    #[error("period duration must not be negative")]
    NegativeDuration,

    #[error("instant arithmetic overflowed the representable range")]
    Overflow,
}

/// Canonical error representation shared by the workspace crates.
#[derive(Debug, Error)]
pub enum TimeChainError {
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("deserialization error: {0}")]
    DeserializationError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("logging setup error: {0}")]
    LoggingError(String),
}

impl From<serde_json::Error> for TimeChainError {
    fn from(err: serde_json::Error) -> Self {
        TimeChainError::DeserializationError(err.to_string())
    }
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("environment variable {key} is not valid unicode")]
    NotUnicode {
        key: String,
        #[source]
        source: std::env::VarError,
    },
}

impl From<ConfigError> for TimeChainError {
    fn from(value: ConfigError) -> Self {
        TimeChainError::ConfigError(value.to_string())
    }
}
