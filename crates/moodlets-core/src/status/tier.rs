//! Urgency tier classification and the per-dimension reminder delay table.

use serde::{Deserialize, Serialize};

use super::vector::Dimension;

/// Coarse urgency bucket derived from a dimension's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Mid,
    Low,
}

/// Classify a dimension value against the 0.8 / 0.5 thresholds.
///
/// Boundaries are inclusive toward the lower-urgency side: exactly 0.8 is
/// Mid and exactly 0.5 is Low.
pub fn classify(value: f64) -> Tier {
    if value > 0.8 {
        Tier::High
    } else if value > 0.5 {
        Tier::Mid
    } else {
        Tier::Low
    }
}

/// Reminder delays in minutes for one dimension, per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDelays {
    pub high: u32,
    pub mid: u32,
    pub low: u32,
}

impl TierDelays {
    /// Delay in minutes for a tier.
    pub fn for_tier(&self, tier: Tier) -> u32 {
        match tier {
            Tier::High => self.high,
            Tier::Mid => self.mid,
            Tier::Low => self.low,
        }
    }
}

/// Per-dimension reminder delay table. Statically configured; must cover
/// all six dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayTable {
    pub hunger: TierDelays,
    pub thirst: TierDelays,
    pub energy: TierDelays,
    pub hygiene: TierDelays,
    pub social: TierDelays,
    pub fun: TierDelays,
}

impl Default for DelayTable {
    fn default() -> Self {
        Self {
            hunger: TierDelays { high: 6 * 60, mid: 3 * 60, low: 45 },
            thirst: TierDelays { high: 2 * 60, mid: 60, low: 20 },
            energy: TierDelays { high: 18 * 60, mid: 10 * 60, low: 4 * 60 },
            hygiene: TierDelays { high: 28 * 60, mid: 14 * 60, low: 5 * 60 },
            social: TierDelays { high: 72 * 60, mid: 42 * 60, low: 24 * 60 },
            fun: TierDelays { high: 48 * 60, mid: 24 * 60, low: 12 * 60 },
        }
    }
}

impl DelayTable {
    /// Get the delays for a dimension.
    pub fn get(&self, dimension: Dimension) -> TierDelays {
        match dimension {
            Dimension::Hunger => self.hunger,
            Dimension::Thirst => self.thirst,
            Dimension::Energy => self.energy,
            Dimension::Hygiene => self.hygiene,
            Dimension::Social => self.social,
            Dimension::Fun => self.fun,
        }
    }

    /// Delay in minutes for a dimension at its classified tier.
    pub fn delay_minutes(&self, dimension: Dimension, value: f64) -> u32 {
        self.get(dimension).for_tier(classify(value))
    }
}
