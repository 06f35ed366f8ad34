//! Reminder schedule orchestration.
//!
//! The manager wires the planner, the collision resolver, and the message
//! catalogs to three injected collaborator ports: notification delivery,
//! the reminder registry, and the status store. All operations are
//! asynchronous but logically single-threaded; each runs to completion
//! before the next is considered settled.
//!
//! Failure policy: a registry or status-store outage degrades to the
//! empty/default value and the operation proceeds; a delivery permission
//! denial aborts the operation before any registry write, so a reminder
//! that was never actually scheduled is never reported as enabled.

use std::collections::BTreeSet;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::{DecayRates, DelayTable, Dimension, StatusVector};

use super::collision;
use super::messages;
use super::planner::{self, ScheduledTarget};
use super::ports::{
    NotificationDelivery, NotificationRequest, ReminderRegistry, ReminderTag, StatusStore, Trigger,
    TriggerPreference,
};

/// Scheduling configuration: decay rates, the delay table, the daily
/// reminder slot, and notification text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSettings {
    pub decay: DecayRates,
    pub delays: DelayTable,
    /// Fixed slot for the recurring daily check-in.
    pub daily_target: ScheduledTarget,
    pub update_title: String,
    pub daily_title: String,
    pub daily_body: String,
    /// Seed for message selection; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            decay: DecayRates::default(),
            delays: DelayTable::default(),
            daily_target: ScheduledTarget { hour: 9, minute: 0 },
            update_title: "❤️ Moodlets Update! ❤️".to_string(),
            daily_title: "❤️ Moodlets Reminder! ❤️".to_string(),
            daily_body: "How are you feeling today?".to_string(),
            seed: None,
        }
    }
}

/// Per-reminder on/off summary, read from the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderStates {
    pub daily: bool,
    pub hunger: bool,
    pub thirst: bool,
    pub energy: bool,
    pub hygiene: bool,
    pub social: bool,
    pub fun: bool,
}

impl ReminderStates {
    /// Build the summary from a registry tag set.
    pub fn from_tags(tags: &BTreeSet<ReminderTag>) -> Self {
        Self {
            daily: tags.contains(&ReminderTag::Daily),
            hunger: tags.contains(&ReminderTag::Status(Dimension::Hunger)),
            thirst: tags.contains(&ReminderTag::Status(Dimension::Thirst)),
            energy: tags.contains(&ReminderTag::Status(Dimension::Energy)),
            hygiene: tags.contains(&ReminderTag::Status(Dimension::Hygiene)),
            social: tags.contains(&ReminderTag::Status(Dimension::Social)),
            fun: tags.contains(&ReminderTag::Status(Dimension::Fun)),
        }
    }
}

/// Orchestrates reminder scheduling over injected collaborator ports.
pub struct ScheduleManager<D, R, S> {
    delivery: D,
    registry: R,
    status_store: S,
    settings: SchedulerSettings,
    rng: Mcg128Xsl64,
    clock: Box<dyn Fn() -> DateTime<Local>>,
}

impl<D, R, S> ScheduleManager<D, R, S>
where
    D: NotificationDelivery,
    R: ReminderRegistry,
    S: StatusStore,
{
    /// Create a manager with the given ports and settings.
    pub fn new(delivery: D, registry: R, status_store: S, settings: SchedulerSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self {
            delivery,
            registry,
            status_store,
            settings,
            rng,
            clock: Box::new(Local::now),
        }
    }

    /// Replace the clock source (for tests).
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Local> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The settings this manager schedules with.
    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    /// Turn a dimension reminder on.
    ///
    /// Plans the slot from the current value, resolves it against every
    /// currently scheduled target, requests one non-repeating delivery,
    /// then records the dimension in the registry. Returns the resolved
    /// slot. A delivery failure aborts before the registry write.
    pub async fn enable(
        &mut self,
        dimension: Dimension,
        value: f64,
    ) -> Result<ScheduledTarget, CoreError> {
        let now = (self.clock)().naive_local();
        let proposed = planner::plan_target(dimension, value, &self.settings.delays, now);

        // Read the existing targets fresh immediately before resolving to
        // narrow the race window between interleaved enables.
        let existing: Vec<ScheduledTarget> = self
            .delivery
            .list_scheduled()
            .await
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.target)
            .collect();
        let target = collision::resolve(proposed, &existing);

        let body = messages::update_message(dimension, value, &mut self.rng);
        let request = NotificationRequest {
            title: self.settings.update_title.clone(),
            body,
            tag: ReminderTag::Status(dimension),
            target,
            trigger: self.trigger_for(target, false, now),
        };
        self.delivery.schedule(request).await?;
        self.register(ReminderTag::Status(dimension)).await;
        Ok(target)
    }

    /// Turn a dimension reminder off: cancel its scheduled entries and
    /// remove it from the registry.
    pub async fn disable(&mut self, dimension: Dimension) -> Result<(), CoreError> {
        self.cancel_tagged(ReminderTag::Status(dimension)).await?;
        self.unregister(ReminderTag::Status(dimension)).await;
        Ok(())
    }

    /// Turn the daily check-in reminder off.
    pub async fn disable_daily(&mut self) -> Result<(), CoreError> {
        self.cancel_tagged(ReminderTag::Daily).await?;
        self.unregister(ReminderTag::Daily).await;
        Ok(())
    }

    /// Re-derive every enabled dimension reminder from a freshly saved
    /// vector.
    ///
    /// Clears all non-daily scheduled entries first, then re-enables each
    /// dimension present in the registry with its new value, so delays
    /// always reflect the latest observation.
    pub async fn recompute_on_save(&mut self, vector: &StatusVector) -> Result<(), CoreError> {
        self.clear_all_except_daily().await?;
        let tags = self.registry.read().await.unwrap_or_default();
        for dimension in Dimension::ALL {
            if tags.contains(&ReminderTag::Status(dimension)) {
                self.enable(dimension, vector.get(dimension)).await?;
            }
        }
        Ok(())
    }

    /// Cancel every scheduled entry except the daily reminder.
    pub async fn clear_all_except_daily(&self) -> Result<(), CoreError> {
        let entries = self.delivery.list_scheduled().await.unwrap_or_default();
        for entry in entries.iter().filter(|e| e.tag != ReminderTag::Daily) {
            self.delivery.cancel(&entry.handle).await.map_err(CoreError::from)?;
        }
        Ok(())
    }

    /// Make sure the recurring daily check-in is scheduled.
    ///
    /// Idempotent: returns `false` without side effects when an entry with
    /// the daily tag already exists, `true` when one was newly scheduled.
    pub async fn ensure_daily(&mut self) -> Result<bool, CoreError> {
        let entries = self.delivery.list_scheduled().await.unwrap_or_default();
        if entries.iter().any(|e| e.tag == ReminderTag::Daily) {
            return Ok(false);
        }

        let now = (self.clock)().naive_local();
        let target = self.settings.daily_target;
        let request = NotificationRequest {
            title: self.settings.daily_title.clone(),
            body: self.settings.daily_body.clone(),
            tag: ReminderTag::Daily,
            target,
            trigger: self.trigger_for(target, true, now),
        };
        self.delivery.schedule(request).await?;
        self.register(ReminderTag::Daily).await;
        Ok(true)
    }

    /// Cancel every scheduled entry and clear the registry, daily
    /// included.
    pub async fn disable_all(&mut self) -> Result<(), CoreError> {
        self.delivery.cancel_all().await?;
        let _ = self.registry.write(&BTreeSet::new()).await;
        Ok(())
    }

    /// The per-reminder on/off summary from the registry.
    pub async fn reminder_states(&self) -> ReminderStates {
        ReminderStates::from_tags(&self.registry.read().await.unwrap_or_default())
    }

    /// The current status vector: the latest snapshot decayed to now, or
    /// the default vector when no observation exists or the store is
    /// unreachable.
    pub async fn current_vector(&self) -> StatusVector {
        let now = (self.clock)().with_timezone(&Utc);
        match self.status_store.latest_snapshot().await {
            Ok(Some(snapshot)) => snapshot.current_vector(now, &self.settings.decay),
            _ => StatusVector::default(),
        }
    }

    /// Whether a tag is currently registered as enabled.
    pub async fn is_enabled(&self, tag: ReminderTag) -> bool {
        self.registry.read().await.unwrap_or_default().contains(&tag)
    }

    fn trigger_for(&self, target: ScheduledTarget, repeats: bool, now: NaiveDateTime) -> Trigger {
        match self.delivery.trigger_preference() {
            TriggerPreference::WallClock => Trigger::AtClockTime {
                hour: target.hour,
                minute: target.minute,
                repeats,
            },
            TriggerPreference::RelativeSeconds => Trigger::AfterSeconds {
                seconds: planner::seconds_until_next(target, now),
                repeats,
            },
        }
    }

    async fn cancel_tagged(&self, tag: ReminderTag) -> Result<(), CoreError> {
        let entries = self.delivery.list_scheduled().await.unwrap_or_default();
        for entry in entries.iter().filter(|e| e.tag == tag) {
            self.delivery.cancel(&entry.handle).await.map_err(CoreError::from)?;
        }
        Ok(())
    }

    // Registry writes are fire-and-forget: an unreachable registry is a
    // degraded state, not a failure, and the next recompute reconciles it.
    async fn register(&self, tag: ReminderTag) {
        let mut tags = self.registry.read().await.unwrap_or_default();
        if tags.insert(tag) {
            let _ = self.registry.write(&tags).await;
        }
    }

    async fn unregister(&self, tag: ReminderTag) {
        let mut tags = self.registry.read().await.unwrap_or_default();
        if tags.remove(&tag) {
            let _ = self.registry.write(&tags).await;
        }
    }
}
