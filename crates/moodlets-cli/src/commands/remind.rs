use clap::Subcommand;

use moodlets_core::ReminderTag;

#[derive(Subcommand)]
pub enum RemindAction {
    /// Turn a reminder on (daily, hunger, thirst, energy, hygiene, social, fun)
    On {
        /// Reminder identifier
        target: String,
    },
    /// Turn a reminder off
    Off {
        /// Reminder identifier
        target: String,
    },
    /// Show which reminders are enabled
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Turn every reminder off and clear the registry
    Clear,
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    let rt = super::runtime()?;
    let mut manager = super::build_manager()?;

    match action {
        RemindAction::On { target } => {
            let tag = ReminderTag::parse(&target)?;
            match tag {
                ReminderTag::Daily => {
                    let scheduled = rt.block_on(manager.ensure_daily())?;
                    let slot = manager.settings().daily_target;
                    if scheduled {
                        println!("daily reminder scheduled at {slot}");
                    } else {
                        println!("daily reminder already scheduled");
                    }
                }
                ReminderTag::Status(dimension) => {
                    let slot = rt.block_on(async {
                        let value = manager.current_vector().await.get(dimension);
                        manager.enable(dimension, value).await
                    })?;
                    println!("{dimension} reminder set for {slot}");
                }
            }
        }
        RemindAction::Off { target } => {
            let tag = ReminderTag::parse(&target)?;
            match tag {
                ReminderTag::Daily => rt.block_on(manager.disable_daily())?,
                ReminderTag::Status(dimension) => rt.block_on(manager.disable(dimension))?,
            }
            println!("{target} reminder off");
        }
        RemindAction::List { json } => {
            let states = rt.block_on(manager.reminder_states());
            if json {
                println!("{}", serde_json::to_string_pretty(&states)?);
            } else {
                let rows = [
                    ("daily", states.daily),
                    ("hunger", states.hunger),
                    ("thirst", states.thirst),
                    ("energy", states.energy),
                    ("hygiene", states.hygiene),
                    ("social", states.social),
                    ("fun", states.fun),
                ];
                for (name, enabled) in rows {
                    println!("{:<8} {}", name, if enabled { "on" } else { "off" });
                }
            }
        }
        RemindAction::Clear => {
            rt.block_on(manager.disable_all())?;
            println!("all reminders cleared");
        }
    }
    Ok(())
}
