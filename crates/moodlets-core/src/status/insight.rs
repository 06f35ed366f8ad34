//! Status insight helpers: lowest-dimension lookup, long-form
//! recommendations, feeling words, and display scoring.

use indoc::indoc;
use rand::Rng;
use rand_pcg::Mcg128Xsl64;

use super::vector::{Dimension, StatusVector};

/// The lowest-valued dimension, reported only when it is actually in need
/// of attention (below 0.5).
pub fn lowest_dimension(vector: &StatusVector) -> Option<Dimension> {
    let mut lowest = Dimension::Hunger;
    for (dimension, value) in vector.iter() {
        if value < vector.get(lowest) {
            lowest = dimension;
        }
    }
    if vector.get(lowest) < 0.5 {
        Some(lowest)
    } else {
        None
    }
}

/// The word describing how a depleted dimension feels.
pub fn feeling_word(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Hunger => "hungry",
        Dimension::Thirst => "thirsty",
        Dimension::Hygiene => "dirty",
        Dimension::Energy => "tired",
        Dimension::Social => "lonely",
        Dimension::Fun => "bored",
    }
}

/// Mean of the six values; 1.0 is a perfectly balanced day.
pub fn overall_score(vector: &StatusVector) -> f64 {
    vector.iter().map(|(_, v)| v).sum::<f64>() / Dimension::ALL.len() as f64
}

/// Red-to-green RGB color string for a single value, for display.
pub fn status_color(value: f64) -> String {
    let value = value.clamp(0.0, 1.0);
    let red = ((1.0 - value) * 255.0).round() as u8;
    let green = (value * 255.0).round() as u8;
    format!("rgb({red}, {green}, 0)")
}

/// Pick a long-form recommendation for a dimension.
pub fn recommendation(dimension: Dimension, rng: &mut Mcg128Xsl64) -> &'static str {
    let catalog = recommendation_catalog(dimension);
    catalog[rng.gen_range(0..catalog.len())]
}

fn recommendation_catalog(dimension: Dimension) -> &'static [&'static str] {
    match dimension {
        Dimension::Hunger => &[
            indoc! {"
                Feeling a bit hungry? You should get something to eat!

                Eating regularly is important for your health."},
            indoc! {"
                Hunger kicking in? Time for a snack or a meal to keep your energy up!

                Regular meals help maintain good health and mood."},
            indoc! {"
                Stomach rumbling? A balanced meal could be just what you need right now.

                Nutritious food fuels your body and mind."},
            indoc! {"
                Need a bite? Opt for something healthy to nourish your body.

                Eating well is essential for maintaining energy levels."},
        ],
        Dimension::Thirst => &[
            indoc! {"
                Don't forget to drink lots of water!

                Water can help you stay hydrated and keep your skin healthy. Low hydration can also cause headaches and fatigue."},
            indoc! {"
                Feeling thirsty? Keep a water bottle handy and stay hydrated!

                Proper hydration is key to maintaining overall health."},
            indoc! {"
                Need a sip? Regular water intake is crucial for health and well-being.

                Staying hydrated helps with focus and energy."},
            indoc! {"
                Quench your thirst with some water. It's essential for your body's daily functions.

                Hydration impacts mood and concentration."},
        ],
        Dimension::Hygiene => &[
            indoc! {"
                Feeling a bit grubby? Try having a little wash or trying some clean clothes.

                Getting clean can help you feel refreshed and ready to take on the day."},
            indoc! {"
                Time to freshen up? A quick shower or change of clothes can do wonders!

                Maintaining good hygiene boosts confidence and health."},
            indoc! {"
                A bit unkempt? A shower and fresh attire can lift your spirits.

                Personal hygiene is key to feeling good about yourself."},
            indoc! {"
                Need to rejuvenate? Consider a relaxing bath or a grooming session.

                Good hygiene practices can enhance your mood and health."},
        ],
        Dimension::Energy => &[
            indoc! {"
                Your energy levels are getting pretty low! Try getting some rest or having something to eat and drink to feel more energized.

                Getting enough sleep is important for your health and can help you feel more motivated for the day ahead."},
            indoc! {"
                Running on low? Consider a short nap or a healthy snack to boost your energy levels.

                Balancing rest and nutrition is crucial for staying energized."},
            indoc! {"
                Feeling sluggish? A quick break or a walk might just be what you need.

                Regular physical activity can boost your energy and mood."},
            indoc! {"
                Lacking energy? Assess your sleep schedule and diet for improvements.

                Adequate rest and nutrition are vital for sustained energy."},
        ],
        Dimension::Social => &[
            indoc! {"
                Have a yearning to meet some friends? Try calling someone you know or joining a club.

                Socialising is important for your mental health and can help you feel more connected to others."},
            indoc! {"
                Feeling isolated? Reach out to a friend or family member, or consider meeting new people.

                Social connections are vital for emotional well-being."},
            indoc! {"
                Need human interaction? Organize a meet-up or participate in a community event.

                Engaging with others can uplift your spirits."},
            indoc! {"
                Looking for company? A quick call or message to a friend can brighten your day.

                Regular social contact is essential for mental health."},
        ],
        Dimension::Fun => &[
            indoc! {"
                Getting restless or bored? Try doing something you enjoy!

                Having fun is important for your mental health and can help you feel more positive."},
            indoc! {"
                Looking for a mood boost? Engage in a hobby or activity you love!

                Recreational activities can greatly enhance your mood and well-being."},
            indoc! {"
                Bored? Dive into a new book, watch a movie, or explore a hobby.

                Enjoyable activities are crucial for relaxation and happiness."},
            indoc! {"
                Need some excitement? Try something new or revisit an old favorite pastime.

                Variety in leisure activities can keep life interesting and joyful."},
        ],
    }
}
