use chrono::Duration;

use super::TimePeriod;

/// Anything that can say how long it lasts.
pub trait HasDuration {
    fn duration(&self) -> Duration;
}

impl HasDuration for TimePeriod {
    fn duration(&self) -> Duration {
        TimePeriod::duration(self)
    }
}

impl HasDuration for Duration {
    fn duration(&self) -> Duration {
        *self
    }
}

impl<T: HasDuration + ?Sized> HasDuration for &T {
    fn duration(&self) -> Duration {
        (**self).duration()
    }
}
