//! TimeChain: chains of adjacent time periods.
//!
//! A chain models a run of back-to-back intervals such as sequential
//! meetings or appointments. Each period starts exactly where the previous
//! one ends, and the chain keeps it that way as periods are appended,
//! inserted and removed.
//!
//! # Architecture
//!
//! * `timechain-core`: errors, configuration and logging setup
//! * `timechain-protocol`: the [`TimePeriod`] value and the [`TimePeriodGroup`] capability
//! * [`chain`]: the [`TimePeriodChain`] itself
//! * [`snapshot`]: JSON snapshots validated on the way back in
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use timechain::prelude::*;
//!
//! let nine = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
//! let first = TimePeriod::from_start(nine, Duration::minutes(30)).unwrap();
//! let mut chain = TimePeriodChain::starting_with(first)?;
//!
//! let next = chain.append(Duration::minutes(30))?;
//! assert_eq!(next.start(), first.end());
//! assert_eq!(chain.count(), 2);
//! # Ok::<(), timechain::ChainError>(())
//! ```

pub mod chain;
pub mod snapshot;

pub use chain::{ChainResult, TimePeriodChain};
pub use snapshot::{from_snapshot, to_snapshot};
pub use timechain_core::{config, logging, ChainConfig, ChainError, InsertPolicy, TimeChainError};
pub use timechain_protocol::period::{HasDuration, PeriodCollection, TimePeriod, TimePeriodGroup};

pub mod prelude {
    pub use crate::chain::{ChainResult, TimePeriodChain};
    pub use timechain_core::{ChainError, InsertPolicy};
    pub use timechain_protocol::prelude::*;
}
