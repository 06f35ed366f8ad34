//! Status model: the six-dimension well-being vector, its decay over time,
//! and urgency classification.

pub mod decay;
pub mod insight;
pub mod tier;
pub mod vector;

pub use decay::{decay, DecayRate, DecayRates, Snapshot};
pub use insight::{feeling_word, lowest_dimension, overall_score, recommendation, status_color};
pub use tier::{classify, DelayTable, Tier, TierDelays};
pub use vector::{Dimension, StatusVector};
