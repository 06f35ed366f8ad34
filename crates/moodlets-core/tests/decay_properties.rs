//! Property-based tests for the decay model.

use chrono::{Duration, TimeZone, Utc};
use moodlets_core::{decay, DecayRates, Dimension, StatusVector};
use proptest::prelude::*;

fn arb_vector() -> impl Strategy<Value = StatusVector> {
    (
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
    )
        .prop_map(|(hunger, thirst, energy, hygiene, social, fun)| StatusVector {
            hunger,
            thirst,
            energy,
            hygiene,
            social,
            fun,
        })
}

proptest! {
    #[test]
    fn decayed_values_stay_in_range(vector in arb_vector(), elapsed_mins in 0i64..(14 * 24 * 60)) {
        let origin = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let now = origin + Duration::minutes(elapsed_mins);
        let decayed = decay(&vector, origin, now, &DecayRates::default());
        for (_, value) in decayed.iter() {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn decay_is_monotonic_in_elapsed_time(
        vector in arb_vector(),
        t1 in 0i64..(7 * 24 * 60),
        extra in 0i64..(7 * 24 * 60),
    ) {
        let origin = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rates = DecayRates::default();
        let earlier = decay(&vector, origin, origin + Duration::minutes(t1), &rates);
        let later = decay(&vector, origin, origin + Duration::minutes(t1 + extra), &rates);
        for dimension in Dimension::ALL {
            prop_assert!(later.get(dimension) <= earlier.get(dimension) + 1e-12);
        }
    }

    #[test]
    fn zero_elapsed_time_changes_nothing(vector in arb_vector()) {
        let origin = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let decayed = decay(&vector, origin, origin, &DecayRates::default());
        prop_assert_eq!(decayed, vector);
    }

    #[test]
    fn clock_skew_never_increases_values(vector in arb_vector(), skew_mins in 1i64..(24 * 60)) {
        let origin = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let now = origin - Duration::minutes(skew_mins);
        let decayed = decay(&vector, origin, now, &DecayRates::default());
        prop_assert_eq!(decayed, vector);
    }
}
