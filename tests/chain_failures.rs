// Failing operations must leave the chain exactly as it was.
use chrono::{DateTime, Duration, TimeZone, Utc};
use timechain::prelude::*;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0).unwrap()
}

fn minutes(n: i64) -> Duration {
    Duration::minutes(n)
}

fn moment(instant: DateTime<Utc>) -> TimePeriod {
    TimePeriod::from_parts(Some(instant), Some(instant))
}

#[test]
fn batch_overflowing_partway_appends_nothing() {
    let edge = DateTime::<Utc>::MAX_UTC - minutes(30);
    let mut chain = TimePeriodChain::starting_with(moment(edge)).expect("seed");
    let before = chain.clone();

    let batch: PeriodCollection = vec![
        TimePeriod::new(at(9, 0), at(9, 10)),
        TimePeriod::new(at(9, 10), at(9, 20)),
        TimePeriod::new(at(12, 0), at(13, 0)),
    ]
    .into();

    assert_eq!(chain.append_contents_of(&batch), Err(ChainError::Overflow));
    assert_eq!(chain, before);
    assert_eq!(chain.count(), 1);
}

#[test]
fn batch_with_a_reversed_member_appends_nothing() {
    let mut chain = TimePeriodChain::starting_with(TimePeriod::new(at(9, 0), at(9, 30)))
        .expect("seed");
    let before = chain.clone();

    let batch: PeriodCollection = vec![
        TimePeriod::new(at(9, 0), at(9, 10)),
        TimePeriod::from_parts(Some(at(11, 0)), Some(at(10, 0))),
    ]
    .into();

    assert_eq!(
        chain.append_contents_of(&batch),
        Err(ChainError::NegativeDuration)
    );
    assert_eq!(chain, before);
}

#[test]
fn negative_append_is_refused_and_later_appends_stay_adjacent() {
    let mut chain = TimePeriodChain::starting_with(TimePeriod::new(at(9, 0), at(9, 30)))
        .expect("seed");

    assert_eq!(chain.append(minutes(-30)), Err(ChainError::NegativeDuration));
    assert_eq!(chain.count(), 1);

    let next = chain.append(minutes(10)).expect("append");
    assert_eq!(next, TimePeriod::new(at(9, 30), at(9, 40)));
    assert!(chain.is_contiguous());
}

#[test]
fn insert_overflowing_the_tail_shift_is_rejected() {
    let max = DateTime::<Utc>::MAX_UTC;
    let mut chain = TimePeriodChain::from_periods(vec![
        TimePeriod::new(max - Duration::hours(2), max - Duration::hours(1)),
        TimePeriod::new(max - Duration::hours(1), max - minutes(30)),
    ])
    .expect("adjacent");
    let before = chain.clone();

    let slot = TimePeriod::new(max - Duration::hours(2), max - Duration::hours(1));
    assert_eq!(chain.insert(slot, 0), Err(ChainError::Overflow));
    assert_eq!(chain.insert_anchored(slot, 0), Err(ChainError::Overflow));
    assert_eq!(chain, before);
}

#[test]
fn remove_underflowing_the_tail_shift_is_rejected() {
    let min = DateTime::<Utc>::MIN_UTC;
    let mut chain =
        TimePeriodChain::starting_with(TimePeriod::new(min, min + minutes(10))).expect("seed");

    // Verbatim inserts at the end are taken as given, which lets a long period
    // sit in front of one that cannot be pulled back far enough.
    chain
        .insert(TimePeriod::new(at(9, 0), at(12, 0)), 1)
        .expect("insert long period");
    chain
        .insert(TimePeriod::new(min + minutes(20), min + minutes(30)), 2)
        .expect("insert trailing period");
    let before = chain.clone();

    assert_eq!(chain.remove(1), Err(ChainError::Overflow));
    assert_eq!(chain, before);
    assert_eq!(chain.count(), 3);
}

#[test]
fn anchoring_to_a_period_without_start_fails() {
    let head = TimePeriod::from_parts(None, Some(at(10, 0)));
    let mut chain = TimePeriodChain::starting_with(head).expect("seed");
    chain.append(minutes(30)).expect("append");
    let before = chain.clone();

    let slot = TimePeriod::new(at(10, 0), at(10, 15));
    assert_eq!(
        chain.insert_anchored(slot, 0),
        Err(ChainError::UnanchoredPeriod { index: 0 })
    );
    assert_eq!(
        chain.insert_with(slot, 0, InsertPolicy::Strict),
        Err(ChainError::UnanchoredPeriod { index: 0 })
    );
    assert_eq!(chain, before);
}

#[test]
fn remove_keeps_unset_bounds_unset() {
    let mut chain = TimePeriodChain::starting_with(TimePeriod::new(at(9, 0), at(10, 0)))
        .expect("seed");
    chain.append(minutes(60)).expect("append");
    chain
        .insert(TimePeriod::from_parts(Some(at(11, 0)), None), 2)
        .expect("open-ended tail");

    let removed = chain.remove(0).expect("remove");
    assert_eq!(removed, TimePeriod::new(at(9, 0), at(10, 0)));
    assert_eq!(chain.count(), 2);
    assert_eq!(chain.get(0), Some(&TimePeriod::new(at(9, 0), at(10, 0))));
    assert_eq!(chain.get(1), Some(&TimePeriod::from_parts(Some(at(10, 0)), None)));
    assert!(chain.is_contiguous());

    let before = chain.clone();
    assert_eq!(
        chain.append(minutes(15)),
        Err(ChainError::UnanchoredPeriod { index: 1 })
    );
    assert_eq!(chain, before);
}
