// Insert policy chosen through environment configuration.
use chrono::{DateTime, TimeZone, Utc};
use timechain::logging::init_from_config;
use timechain::prelude::*;
use timechain::ChainConfig;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0).unwrap()
}

fn two_slots() -> TimePeriodChain {
    TimePeriodChain::from_periods(vec![
        TimePeriod::new(at(9, 0), at(10, 0)),
        TimePeriod::new(at(10, 0), at(11, 0)),
    ])
    .unwrap()
}

#[test]
fn anchored_policy_from_environment_repairs_placement() {
    std::env::set_var("CFGTEST_ANCHORED_INSERT_POLICY", "anchored");
    std::env::set_var("CFGTEST_ANCHORED_LOG", "timechain=debug");
    let config = ChainConfig::from_env_with_prefix("CFGTEST_ANCHORED_").unwrap();
    let _ = init_from_config(&config);

    let mut chain = two_slots();
    let inserted = chain
        .insert_with(
            TimePeriod::new(at(16, 0), at(16, 30)),
            1,
            config.insert_policy,
        )
        .unwrap();

    assert_eq!(inserted, TimePeriod::new(at(10, 0), at(10, 30)));
    assert!(chain.is_contiguous());
    assert_eq!(chain.end(), Some(at(11, 30)));
}

#[test]
fn default_policy_inserts_verbatim() {
    let config = ChainConfig::from_env_with_prefix("CFGTEST_UNSET_").unwrap();
    assert_eq!(config.insert_policy, InsertPolicy::Verbatim);

    let mut chain = two_slots();
    let misplaced = TimePeriod::new(at(16, 0), at(16, 30));
    chain.insert_with(misplaced, 1, config.insert_policy).unwrap();

    assert_eq!(chain.get(1), Some(&misplaced));
    assert!(!chain.is_contiguous());
}
