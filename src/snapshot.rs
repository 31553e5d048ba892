//! JSON snapshots of a chain.
//!
//! A snapshot is the chain's periods as a plain JSON array. Reading one back
//! goes through [`TimePeriodChain::from_periods`], so a snapshot with a gap,
//! an overlap or a reversed period fails with the [`ChainError`] that names
//! the offending index rather than a flattened parse message.

use timechain_core::{ChainError, CoreResult, TimeChainError};
use timechain_protocol::period::TimePeriod;

use crate::chain::TimePeriodChain;

/// Pretty-printed JSON array of the chain's periods.
pub fn to_snapshot(chain: &TimePeriodChain) -> CoreResult<String> {
    serde_json::to_string_pretty(chain)
        .map_err(|err| TimeChainError::SerializationError(err.to_string()))
}

/// Parses a snapshot and rebuilds the chain it describes.
///
/// Malformed JSON is a [`TimeChainError::DeserializationError`]; well-formed
/// periods that do not chain are a [`TimeChainError::Chain`].
pub fn from_snapshot(input: &str) -> CoreResult<TimePeriodChain> {
    let periods: Vec<TimePeriod> = serde_json::from_str(input)?;
    Ok(TimePeriodChain::from_periods(periods)?)
}

/// Same as [`from_snapshot`] for raw bytes, e.g. a file read from disk.
pub fn from_snapshot_slice(input: &[u8]) -> CoreResult<TimePeriodChain> {
    let periods: Vec<TimePeriod> = serde_json::from_slice(input)?;
    Ok(TimePeriodChain::from_periods(periods)?)
}

/// The chain-level failure behind a snapshot error, if there is one.
pub fn chain_error(err: &TimeChainError) -> Option<ChainError> {
    match err {
        TimeChainError::Chain(chain) => Some(*chain),
        _ => None,
    }
}
