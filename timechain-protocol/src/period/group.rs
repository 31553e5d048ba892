use chrono::{DateTime, Duration, Utc};

use super::TimePeriod;

/// Read access and traversal over an ordered sequence of periods.
///
/// Implementors only provide [`periods`](TimePeriodGroup::periods). The
/// aggregates scan the whole sequence because a plain group makes no ordering
/// promise; implementors with stronger invariants should override them.
pub trait TimePeriodGroup {
    /// The periods in iteration order.
    fn periods(&self) -> &[TimePeriod];

    fn count(&self) -> usize {
        self.periods().len()
    }

    fn is_empty(&self) -> bool {
        self.periods().is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, TimePeriod> {
        self.periods().iter()
    }

    /// Earliest start of any period.
    fn start(&self) -> Option<DateTime<Utc>> {
        self.periods().iter().filter_map(TimePeriod::start).min()
    }

    /// Latest end of any period.
    fn end(&self) -> Option<DateTime<Utc>> {
        self.periods().iter().filter_map(TimePeriod::end).max()
    }

    /// Span from [`start`](TimePeriodGroup::start) to [`end`](TimePeriodGroup::end).
    fn duration(&self) -> Duration {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }

    fn map<T, F>(&self, transform: F) -> Vec<T>
    where
        F: FnMut(&TimePeriod) -> T,
    {
        self.iter().map(transform).collect()
    }

    fn filter<P>(&self, mut is_included: P) -> Vec<TimePeriod>
    where
        P: FnMut(&TimePeriod) -> bool,
    {
        self.iter()
            .filter(|period| is_included(*period))
            .copied()
            .collect()
    }

    fn reduce<R, F>(&self, initial: R, next_partial: F) -> R
    where
        F: FnMut(R, &TimePeriod) -> R,
    {
        self.iter().fold(initial, next_partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Loose(Vec<TimePeriod>);

    impl TimePeriodGroup for Loose {
        fn periods(&self) -> &[TimePeriod] {
            &self.0
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, 0, 0).unwrap()
    }

    fn sample() -> Loose {
        Loose(vec![
            TimePeriod::new(at(13), at(14)),
            TimePeriod::new(at(9), at(11)),
            TimePeriod::from_parts(None, Some(at(17))),
        ])
    }

    #[test]
    fn aggregates_scan_every_period() {
        let group = sample();
        assert_eq!(group.count(), 3);
        assert_eq!(group.start(), Some(at(9)));
        assert_eq!(group.end(), Some(at(17)));
        assert_eq!(group.duration(), Duration::hours(8));
    }

    #[test]
    fn empty_group_has_no_bounds() {
        let group = Loose(Vec::new());
        assert!(group.is_empty());
        assert_eq!(group.start(), None);
        assert_eq!(group.duration(), Duration::zero());
    }

    #[test]
    fn traversal_preserves_order() {
        let group = sample();
        assert_eq!(
            group.map(|p| p.start()),
            vec![Some(at(13)), Some(at(9)), None]
        );
        assert_eq!(
            group.filter(|p| p.has_start()),
            vec![TimePeriod::new(at(13), at(14)), TimePeriod::new(at(9), at(11))]
        );
        let total = group.reduce(Duration::zero(), |acc, p| acc + p.duration());
        assert_eq!(total, Duration::hours(3));
    }
}
