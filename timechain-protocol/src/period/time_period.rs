use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single interval of time on the UTC timeline.
///
/// Either bound may be unset. The duration is derived from the bounds and is
/// zero unless both are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl TimePeriod {
    /// Creates a bounded period.
    ///
    /// # Panics
    ///
    /// Panics if `end` precedes `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(start <= end, "Invalid period: end must not precede start");
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a bounded period, returning `None` if `end` precedes `start`.
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start <= end).then_some(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Creates a period from raw, possibly unset, bounds.
    pub fn from_parts(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// A period with neither bound set.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates the period beginning at `start` and lasting `duration`.
    ///
    /// Returns `None` if `duration` is negative or the end instant is not
    /// representable.
    pub fn from_start(start: DateTime<Utc>, duration: Duration) -> Option<Self> {
        if duration < Duration::zero() {
            return None;
        }
        let end = start.checked_add_signed(duration)?;
        Some(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Creates the period lasting `duration` and finishing at `end`.
    pub fn from_end(end: DateTime<Utc>, duration: Duration) -> Option<Self> {
        if duration < Duration::zero() {
            return None;
        }
        let start = end.checked_sub_signed(duration)?;
        Some(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }

    /// Time between the bounds, or zero when a bound is unset.
    pub fn duration(&self) -> Duration {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }

    /// Both bounds set and the end before the start.
    ///
    /// Only [`from_parts`](Self::from_parts) and deserialization can produce one.
    pub fn is_reversed(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if end < start)
    }

    /// Both bounds set and equal.
    pub fn is_moment(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start == end)
    }

    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= instant && instant < end,
            _ => false,
        }
    }

    /// Whether the two periods share any instant. Touching bounds do not overlap.
    pub fn overlaps(&self, other: &TimePeriod) -> bool {
        match (self.start, self.end, other.start, other.end) {
            (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
                a_start < b_end && b_start < a_end
            }
            _ => false,
        }
    }

    /// Whether `other` begins exactly where this period ends.
    pub fn abuts(&self, other: &TimePeriod) -> bool {
        matches!((self.end, other.start), (Some(end), Some(start)) if end == start)
    }

    /// Moves every set bound by `delta`, which may be negative.
    ///
    /// Returns `None` if a shifted bound is not representable.
    pub fn shifted(&self, delta: Duration) -> Option<Self> {
        let start = match self.start {
            Some(start) => Some(start.checked_add_signed(delta)?),
            None => None,
        };
        let end = match self.end {
            Some(end) => Some(end.checked_add_signed(delta)?),
            None => None,
        };
        Some(Self { start, end })
    }
}
