use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TimeChainError};

const DEFAULT_PREFIX: &str = "TIMECHAIN_";

/// Runtime environment used by the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn from_str(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

/// How a chain treats a period inserted in the middle of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPolicy {
    /// Insert the caller's period unchanged and shift everything after it.
    #[default]
    Verbatim,
    /// Re-anchor the period at the index before inserting it.
    Anchored,
    /// Insert unchanged, but reject periods that do not start at the anchor.
    Strict,
}

impl InsertPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Some(InsertPolicy::Verbatim),
            "anchored" | "anchor" => Some(InsertPolicy::Anchored),
            "strict" => Some(InsertPolicy::Strict),
            _ => None,
        }
    }
}

/// Settings shared by code that builds and manipulates chains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainConfig {
    pub environment: Environment,
    pub insert_policy: InsertPolicy,
    pub log_level: Option<String>,
}

impl ChainConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix(DEFAULT_PREFIX)
    }

    /// Loads configuration from env vars prefixed with the provided value (e.g. `SCHEDULER_`).
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let key = |suffix: &str| format!("{}{}", prefix, suffix);

        let environment = read_var(&key("ENV"))?
            .map(|raw| Environment::from_str(&raw))
            .unwrap_or_default();

        let policy_key = key("INSERT_POLICY");
        let insert_policy = match read_var(&policy_key)? {
            Some(raw) => InsertPolicy::parse(&raw).ok_or(ConfigError::InvalidValue {
                key: policy_key,
                value: raw,
            })?,
            None => InsertPolicy::default(),
        };

        let log_level = read_var(&key("LOG"))?.filter(|level| !level.trim().is_empty());

        Ok(Self {
            environment,
            insert_policy,
            log_level,
        })
    }

    /// Whether the process is running in production.
    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    /// Returns the configured default log filter, if any.
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

fn read_var(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::NotUnicode {
            key: key.to_string(),
            source,
        }),
    }
}

/// Helper that loads config and converts to the canonical TimeChain error type.
pub fn load_chain_config() -> Result<ChainConfig, TimeChainError> {
    Ok(ChainConfig::from_env()?)
}
