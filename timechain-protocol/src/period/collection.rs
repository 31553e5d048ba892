use serde::{Deserialize, Serialize};

use super::{TimePeriod, TimePeriodGroup};

/// A loose group of periods: any order, gaps and overlaps allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodCollection {
    periods: Vec<TimePeriod>,
}

impl PeriodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, period: TimePeriod) {
        self.periods.push(period);
    }

    /// Orders periods by start; periods without a start sort first.
    pub fn sort_by_start(&mut self) {
        self.periods.sort_by_key(|period| period.start);
    }

    pub fn into_inner(self) -> Vec<TimePeriod> {
        self.periods
    }
}

impl TimePeriodGroup for PeriodCollection {
    fn periods(&self) -> &[TimePeriod] {
        &self.periods
    }
}

impl From<Vec<TimePeriod>> for PeriodCollection {
    fn from(periods: Vec<TimePeriod>) -> Self {
        Self { periods }
    }
}

impl FromIterator<TimePeriod> for PeriodCollection {
    fn from_iter<I: IntoIterator<Item = TimePeriod>>(iter: I) -> Self {
        Self {
            periods: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PeriodCollection {
    type Item = &'a TimePeriod;
    type IntoIter = std::slice::Iter<'a, TimePeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
