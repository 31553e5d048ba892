// Fuzz target driving a chain through arbitrary operation sequences.
#![no_main]

use chrono::{Duration, TimeZone, Utc};
use libfuzzer_sys::fuzz_target;
use timechain::prelude::*;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    match timechain::snapshot::from_snapshot_slice(data) {
        Ok(chain) => assert!(chain.is_contiguous()),
        Err(err) => assert!(
            serde_json::from_slice::<TimePeriodChain>(data).is_err(),
            "snapshot rejected a chain serde accepts: {err}"
        ),
    }

    let Some(origin) = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single() else {
        return;
    };
    let Some(seed) = TimePeriod::from_start(origin, Duration::minutes(data[0] as i64)) else {
        return;
    };
    let Ok(mut chain) = TimePeriodChain::starting_with(seed) else {
        return;
    };

    for pair in data[1..].chunks(2) {
        let arg = pair.get(1).copied().unwrap_or(0) as usize;
        let length = Duration::minutes(arg as i64);
        let _ = match pair[0] % 5 {
            0 => chain.append(length).map(|_| ()),
            1 => chain.remove(arg % (chain.count() + 1)).map(|_| ()),
            2 => chain.pop().map(|_| ()).ok_or(ChainError::EmptyChain),
            3 => {
                let slot = TimePeriod::from_start(origin, length).unwrap_or_default();
                chain
                    .insert_anchored(slot, arg % (chain.count() + 1))
                    .map(|_| ())
            }
            _ if chain.count() < 64 => {
                let tail = chain.clone();
                chain.append_contents_of(&tail).map(|_| ())
            }
            _ => chain.remove(0).map(|_| ()),
        };
        assert!(chain.is_contiguous());
    }
});
