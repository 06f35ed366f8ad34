//! Human-readable reminder message selection.
//!
//! Two ten-message catalogs, templated on the dimension name: one for
//! values still above 0.5, one for depleted values. Selection goes through
//! a caller-supplied seedable rng so tests stay deterministic while
//! production wiring seeds from entropy.

use rand::Rng;
use rand_pcg::Mcg128Xsl64;

use crate::status::Dimension;

const HIGH_LEVEL: [&str; 10] = [
    "Your {dimension} level are good. A little top-up wouldn't hurt though!",
    "Doing well with your {dimension}! Consider a small boost for optimal balance.",
    "Great job on your {dimension} level! A slight increase could be even better.",
    "Your {dimension} is on point! Keep it steady, maybe add a bit more. 🌱",
    "Nice work maintaining your {dimension}. A tiny bit more can be beneficial.",
    "Solid {dimension} level! Keep it up and maybe add a touch more. ☀️",
    "You're managing your {dimension} well. A small addition could be perfect.",
    "Good control over your {dimension} level. How about a slight increase?",
    "Your {dimension} level are looking good. A small boost could do wonders. ✨",
    "Well-balanced {dimension} level! A minor top-up might be a good idea.",
];

const LOW_LEVEL: [&str; 10] = [
    "Your {dimension} level are a bit low. Time for a small boost!",
    "A friendly reminder: top up your {dimension} level when you can.",
    "Looks like your {dimension} could use a bit of attention.",
    "Time to focus a little on your {dimension} level. You've got this!",
    "Consider giving your {dimension} level a nudge. It helps!",
    "A small boost to your {dimension} level would be good now.",
    "It's a good time to review your {dimension} level. Keep an eye on it!",
    "How about we raise those {dimension} level a bit?",
    "Boosting your {dimension} a little could be beneficial. 🚀",
    "An increase in your {dimension} level is recommended. 🌟",
];

/// Pick the body text for a status update notification.
///
/// Values above 0.5 draw from the encouraging catalog, depleted values
/// from the nudging one.
pub fn update_message(dimension: Dimension, value: f64, rng: &mut Mcg128Xsl64) -> String {
    let catalog = if value > 0.5 { &HIGH_LEVEL } else { &LOW_LEVEL };
    let template = catalog[rng.gen_range(0..catalog.len())];
    template.replace("{dimension}", dimension.as_str())
}
