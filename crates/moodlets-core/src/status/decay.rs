//! Time-based status decay model.
//!
//! Each dimension multiplies by `(1 - rate)` every `unit_hours` hours, so a
//! stored snapshot plus elapsed time deterministically yields the current
//! status vector. Decay is monotonically non-increasing and never pushes a
//! value outside [0, 1].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::vector::{Dimension, StatusVector};

/// A snapshot is considered stale, and therefore decayed on read, once it
/// is more than one hour old.
const STALE_AFTER_SECS: i64 = 3600;

/// Fractional depletion applied to one dimension per fixed time unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRate {
    /// Fraction in (0, 1) by which the value shrinks per unit.
    pub rate: f64,
    /// Length of the unit in hours.
    pub unit_hours: f64,
}

/// Per-dimension decay rates. Fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRates {
    pub hunger: DecayRate,
    pub thirst: DecayRate,
    pub energy: DecayRate,
    pub hygiene: DecayRate,
    pub social: DecayRate,
    pub fun: DecayRate,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: DecayRate { rate: 0.20, unit_hours: 1.0 },
            thirst: DecayRate { rate: 0.25, unit_hours: 1.0 },
            energy: DecayRate { rate: 0.08, unit_hours: 1.0 },
            hygiene: DecayRate { rate: 0.07, unit_hours: 2.0 },
            social: DecayRate { rate: 0.05, unit_hours: 2.0 },
            fun: DecayRate { rate: 0.04, unit_hours: 2.0 },
        }
    }
}

impl DecayRates {
    /// Get the rate for a dimension.
    pub fn get(&self, dimension: Dimension) -> DecayRate {
        match dimension {
            Dimension::Hunger => self.hunger,
            Dimension::Thirst => self.thirst,
            Dimension::Energy => self.energy,
            Dimension::Hygiene => self.hygiene,
            Dimension::Social => self.social,
            Dimension::Fun => self.fun,
        }
    }
}

/// Apply decay to a stored vector for the time elapsed between
/// `created_at` and `now`.
///
/// For each dimension: `v' = v * (1 - rate)^(elapsed_hours / unit_hours)`.
/// If `now` is before `created_at` (clock skew) the elapsed time clamps to
/// zero, so decay can never increase a value. Results are clamped into
/// [0, 1] against floating-point drift.
pub fn decay(
    vector: &StatusVector,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    rates: &DecayRates,
) -> StatusVector {
    let elapsed_secs = (now - created_at).num_seconds().max(0);
    let elapsed_hours = elapsed_secs as f64 / 3600.0;

    let mut out = *vector;
    for (dimension, value) in vector.iter() {
        let rate = rates.get(dimension);
        let effective_units = elapsed_hours / rate.unit_hours;
        out.set(dimension, value * (1.0 - rate.rate).powf(effective_units));
    }
    out
}

/// The last persisted status observation.
///
/// Owned by the caller; the decay core only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub vector: StatusVector,
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    /// Create a snapshot, clamping the vector into range.
    pub fn new(vector: StatusVector, created_at: DateTime<Utc>) -> Self {
        Self {
            vector: vector.clamped(),
            created_at,
        }
    }

    /// Whether the snapshot is more than one hour old.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        (now - self.created_at).num_seconds() > STALE_AFTER_SECS
    }

    /// The current vector: unchanged while fresh, decayed once stale.
    pub fn current_vector(&self, now: DateTime<Utc>, rates: &DecayRates) -> StatusVector {
        if self.is_stale(now) {
            decay(&self.vector, self.created_at, now, rates)
        } else {
            self.vector
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn half_vector() -> StatusVector {
        StatusVector {
            hunger: 0.5,
            thirst: 0.5,
            energy: 0.5,
            hygiene: 0.5,
            social: 0.5,
            fun: 0.5,
        }
    }

    #[test]
    fn test_zero_elapsed_is_identity() {
        let now = Utc::now();
        let vector = half_vector();
        assert_eq!(decay(&vector, now, now, &DecayRates::default()), vector);
    }

    #[test]
    fn test_clock_skew_clamps_to_unchanged() {
        let now = Utc::now();
        let vector = half_vector();
        let decayed = decay(&vector, now + Duration::hours(3), now, &DecayRates::default());
        assert_eq!(decayed, vector);
    }

    #[test]
    fn test_five_hours_at_default_hunger_rate() {
        // 1.0 * 0.8^5 = 0.32768
        let origin = Utc::now();
        let decayed = decay(
            &StatusVector::default(),
            origin,
            origin + Duration::hours(5),
            &DecayRates::default(),
        );
        assert!((decayed.hunger - 0.32768).abs() < 1e-9);
    }

    #[test]
    fn test_unit_hours_stretches_decay() {
        // hygiene decays 7% per 2 hours, so after 2h exactly one unit applies
        let origin = Utc::now();
        let decayed = decay(
            &StatusVector::default(),
            origin,
            origin + Duration::hours(2),
            &DecayRates::default(),
        );
        assert!((decayed.hygiene - 0.93).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_non_increase() {
        let origin = Utc::now();
        let rates = DecayRates::default();
        let vector = StatusVector::default();
        let earlier = decay(&vector, origin, origin + Duration::hours(1), &rates);
        let later = decay(&vector, origin, origin + Duration::hours(4), &rates);
        for dimension in Dimension::ALL {
            assert!(later.get(dimension) <= earlier.get(dimension));
        }
    }

    #[test]
    fn test_snapshot_staleness_gate() {
        let now = Utc::now();
        let rates = DecayRates::default();
        let snapshot = Snapshot::new(half_vector(), now - Duration::minutes(30));

        // Fresh: returned unchanged even though some time elapsed
        assert!(!snapshot.is_stale(now));
        assert_eq!(snapshot.current_vector(now, &rates), snapshot.vector);

        // Stale: decay applies
        let later = now + Duration::hours(2);
        assert!(snapshot.is_stale(later));
        let current = snapshot.current_vector(later, &rates);
        assert!(current.hunger < snapshot.vector.hunger);
    }
}
