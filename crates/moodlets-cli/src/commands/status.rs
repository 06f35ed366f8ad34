use chrono::Utc;
use clap::Subcommand;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use moodlets_core::status::{feeling_word, lowest_dimension, overall_score, recommendation, status_color};
use moodlets_core::{Database, Dimension, StatusVector};

#[derive(Subcommand)]
pub enum StatusAction {
    /// Show the current status, decayed to now
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a new observation and reschedule enabled reminders
    Set {
        /// Set every dimension at once
        #[arg(long)]
        all: Option<f64>,
        #[arg(long)]
        hunger: Option<f64>,
        #[arg(long)]
        thirst: Option<f64>,
        #[arg(long)]
        energy: Option<f64>,
        #[arg(long)]
        hygiene: Option<f64>,
        #[arg(long)]
        social: Option<f64>,
        #[arg(long)]
        fun: Option<f64>,
    },
    /// Suggest what to top up, based on the lowest dimension
    Recommend,
    /// Show recent observations
    History {
        /// Number of observations to show
        #[arg(long, default_value_t = 7)]
        limit: u32,
    },
}

pub fn run(action: StatusAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatusAction::Show { json } => {
            let rt = super::runtime()?;
            let manager = super::build_manager()?;
            let vector = rt.block_on(manager.current_vector());
            if json {
                println!("{}", serde_json::to_string_pretty(&vector)?);
            } else {
                print_vector(&vector);
            }
        }
        StatusAction::Set {
            all,
            hunger,
            thirst,
            energy,
            hygiene,
            social,
            fun,
        } => {
            let rt = super::runtime()?;
            let mut manager = super::build_manager()?;
            rt.block_on(async {
                let mut vector = manager.current_vector().await;
                if let Some(value) = all {
                    for dimension in Dimension::ALL {
                        vector.set(dimension, value);
                    }
                }
                let overrides = [
                    (Dimension::Hunger, hunger),
                    (Dimension::Thirst, thirst),
                    (Dimension::Energy, energy),
                    (Dimension::Hygiene, hygiene),
                    (Dimension::Social, social),
                    (Dimension::Fun, fun),
                ];
                for (dimension, value) in overrides {
                    if let Some(value) = value {
                        vector.set(dimension, value);
                    }
                }

                let db = Database::open()?;
                db.record_status(&vector, Utc::now())?;
                manager.recompute_on_save(&vector).await?;
                Ok::<_, Box<dyn std::error::Error>>(())
            })?;
            println!("status saved");
        }
        StatusAction::Recommend => {
            let rt = super::runtime()?;
            let manager = super::build_manager()?;
            let vector = rt.block_on(manager.current_vector());
            match lowest_dimension(&vector) {
                Some(dimension) => {
                    let mut rng = Mcg128Xsl64::from_entropy();
                    println!(
                        "Feeling {}? {}",
                        feeling_word(dimension),
                        recommendation(dimension, &mut rng)
                    );
                }
                None => println!("All dimensions look healthy. Keep it up!"),
            }
        }
        StatusAction::History { limit } => {
            let db = Database::open()?;
            let snapshots = db.recent(limit)?;
            if snapshots.is_empty() {
                println!("no observations recorded yet");
                return Ok(());
            }
            for snapshot in snapshots {
                let score = overall_score(&snapshot.vector);
                println!(
                    "{}  overall {:>3.0}%",
                    snapshot.created_at.format("%Y-%m-%d %H:%M"),
                    score * 100.0
                );
            }
        }
    }
    Ok(())
}

fn print_vector(vector: &StatusVector) {
    for (dimension, value) in vector.iter() {
        let bar_length = (value * 20.0).round() as usize;
        let bar = "█".repeat(bar_length);
        let empty = "░".repeat(20 - bar_length);
        println!(
            "{:<8} {}{} {:>3.0}%  {}",
            dimension.as_str(),
            bar,
            empty,
            value * 100.0,
            status_color(value)
        );
    }
    println!();
    println!("overall: {:.0}%", overall_score(vector) * 100.0);
}
