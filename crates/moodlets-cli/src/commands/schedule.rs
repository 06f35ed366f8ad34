use clap::Subcommand;

use moodlets_core::{NotificationDelivery, ScheduleDb};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// List pending notification requests
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::List { json } => {
            let rt = super::runtime()?;
            let db = ScheduleDb::open()?;
            let entries = rt.block_on(db.list_scheduled())?;

            if json {
                let rows: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|entry| {
                        serde_json::json!({
                            "handle": entry.handle,
                            "tag": entry.tag.as_str(),
                            "time": entry.target.to_string(),
                            "repeats": entry.trigger.repeats(),
                            "title": entry.title,
                            "body": entry.body,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if entries.is_empty() {
                println!("nothing scheduled");
            } else {
                for entry in entries {
                    let repeats = if entry.trigger.repeats() { " (repeats)" } else { "" };
                    println!("{}  {:<8} {}{}", entry.target, entry.tag, entry.body, repeats);
                }
            }
        }
    }
    Ok(())
}
