//! Core shared library for the TimeChain workspace.
//!
//! This crate exposes the primitives the other crates depend on: the
//! error taxonomy, configuration loading and logging setup.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{ChainConfig, Environment, InsertPolicy};
pub use errors::{ChainError, ConfigError, Result as CoreResult, TimeChainError};
