//! The status vector and its six fixed dimensions.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the six tracked well-being dimensions.
///
/// The set is fixed; there are no dynamic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Hunger,
    Thirst,
    Energy,
    Hygiene,
    Social,
    Fun,
}

impl Dimension {
    /// All dimensions, in canonical order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Hunger,
        Dimension::Thirst,
        Dimension::Energy,
        Dimension::Hygiene,
        Dimension::Social,
        Dimension::Fun,
    ];

    /// Stable string identifier (matches the serde form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Hunger => "hunger",
            Dimension::Thirst => "thirst",
            Dimension::Energy => "energy",
            Dimension::Hygiene => "hygiene",
            Dimension::Social => "social",
            Dimension::Fun => "fun",
        }
    }

    /// Parse a dimension from its string identifier.
    pub fn parse(s: &str) -> Result<Dimension, ValidationError> {
        match s {
            "hunger" => Ok(Dimension::Hunger),
            "thirst" => Ok(Dimension::Thirst),
            "energy" => Ok(Dimension::Energy),
            "hygiene" => Ok(Dimension::Hygiene),
            "social" => Ok(Dimension::Social),
            "fun" => Ok(Dimension::Fun),
            other => Err(ValidationError::UnknownIdentifier(other.to_string())),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six-dimension well-being state.
///
/// Every value lies in the closed interval [0, 1]; 1.0 is fully satisfied,
/// 0.0 is fully depleted. Setters clamp into range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusVector {
    pub hunger: f64,
    pub thirst: f64,
    pub energy: f64,
    pub hygiene: f64,
    pub social: f64,
    pub fun: f64,
}

impl Default for StatusVector {
    /// A fresh account starts fully satisfied on every dimension.
    fn default() -> Self {
        Self {
            hunger: 1.0,
            thirst: 1.0,
            energy: 1.0,
            hygiene: 1.0,
            social: 1.0,
            fun: 1.0,
        }
    }
}

impl StatusVector {
    /// Get the value for a dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Hunger => self.hunger,
            Dimension::Thirst => self.thirst,
            Dimension::Energy => self.energy,
            Dimension::Hygiene => self.hygiene,
            Dimension::Social => self.social,
            Dimension::Fun => self.fun,
        }
    }

    /// Set the value for a dimension, clamped into [0, 1].
    pub fn set(&mut self, dimension: Dimension, value: f64) {
        let value = value.clamp(0.0, 1.0);
        match dimension {
            Dimension::Hunger => self.hunger = value,
            Dimension::Thirst => self.thirst = value,
            Dimension::Energy => self.energy = value,
            Dimension::Hygiene => self.hygiene = value,
            Dimension::Social => self.social = value,
            Dimension::Fun => self.fun = value,
        }
    }

    /// Iterate over `(dimension, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    /// Return a copy with every value clamped into [0, 1].
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for d in Dimension::ALL {
            out.set(d, self.get(d));
        }
        out
    }

    /// Validate that every value lies in [0, 1].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (dimension, value) in self.iter() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: dimension.as_str().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
