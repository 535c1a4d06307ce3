#![allow(dead_code)]

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use tempograph_period::{Bound, Interval, Period};
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_test_writer().try_init();
}

/// Seconds after the epoch; a narrow range so generated intervals overlap and touch often.
pub fn instant(seconds: i64) -> DateTime<Utc> { DateTime::from_timestamp(seconds, 0).expect("in range") }

/// Any instant chrono can represent, down to the nanosecond.
pub fn any_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (DateTime::<Utc>::MIN_UTC.timestamp()..=DateTime::<Utc>::MAX_UTC.timestamp(), 0u32..1_000_000_000)
        .prop_map(|(seconds, nanos)| DateTime::from_timestamp(seconds, nanos).expect("in range"))
}

pub fn bound() -> impl Strategy<Value = Bound> {
    prop_oneof![
        1 => Just(Bound::Unbounded),
        4 => (0i64..20, any::<bool>()).prop_map(|(s, inclusive)| Bound::new(instant(s), inclusive)),
        1 => (any_instant(), any::<bool>()).prop_map(|(t, inclusive)| Bound::new(t, inclusive)),
    ]
}

pub fn interval() -> impl Strategy<Value = Interval> { (bound(), bound()).prop_map(|(l, r)| Interval::new(l, r)) }

pub fn period() -> impl Strategy<Value = Period> {
    prop::collection::vec(interval(), 0..5).prop_map(Period::from_intervals)
}
