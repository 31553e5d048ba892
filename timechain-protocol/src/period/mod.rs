mod collection;
mod duration;
mod group;
mod time_period;

pub use collection::PeriodCollection;
pub use duration::HasDuration;
pub use group::TimePeriodGroup;
pub use time_period::TimePeriod;
