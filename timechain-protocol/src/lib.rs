//! Value types shared by the TimeChain crates: single periods and the
//! group capability that ordered sequences of periods expose.

pub mod period;

pub mod prelude {
    pub use crate::period::{HasDuration, PeriodCollection, TimePeriod, TimePeriodGroup};
}
