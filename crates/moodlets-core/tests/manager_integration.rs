//! End-to-end schedule manager tests against in-memory fake ports.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use moodlets_core::{
    CoreError, DeliveryError, Dimension, NotificationDelivery,
    NotificationRequest, RegistryError, ReminderRegistry, ReminderTag, ScheduleManager,
    ScheduledEntry, ScheduledTarget, SchedulerSettings, Snapshot, StatusStore, StatusVector,
    StorageError, Trigger, TriggerPreference,
};

#[derive(Default)]
struct DeliveryState {
    entries: Vec<ScheduledEntry>,
    requests: u32,
    next_id: u32,
    deny: bool,
}

/// Recording fake for the delivery collaborator. Cloneable so tests can
/// keep a handle for inspection after the manager takes ownership.
#[derive(Clone)]
struct FakeDelivery {
    preference: TriggerPreference,
    state: Rc<RefCell<DeliveryState>>,
}

impl FakeDelivery {
    fn new() -> Self {
        Self {
            preference: TriggerPreference::WallClock,
            state: Rc::new(RefCell::new(DeliveryState::default())),
        }
    }

    fn relative() -> Self {
        Self {
            preference: TriggerPreference::RelativeSeconds,
            ..Self::new()
        }
    }

    fn denying() -> Self {
        let fake = Self::new();
        fake.state.borrow_mut().deny = true;
        fake
    }

    fn entries(&self) -> Vec<ScheduledEntry> {
        self.state.borrow().entries.clone()
    }

    fn requests(&self) -> u32 {
        self.state.borrow().requests
    }
}

impl NotificationDelivery for FakeDelivery {
    fn trigger_preference(&self) -> TriggerPreference {
        self.preference
    }

    async fn schedule(&self, request: NotificationRequest) -> Result<String, DeliveryError> {
        let mut state = self.state.borrow_mut();
        if state.deny {
            return Err(DeliveryError::PermissionDenied);
        }
        state.requests += 1;
        state.next_id += 1;
        let handle = format!("n{}", state.next_id);
        state.entries.push(ScheduledEntry {
            handle: handle.clone(),
            title: request.title,
            body: request.body,
            tag: request.tag,
            target: request.target,
            trigger: request.trigger,
        });
        Ok(handle)
    }

    async fn list_scheduled(&self) -> Result<Vec<ScheduledEntry>, DeliveryError> {
        Ok(self.state.borrow().entries.clone())
    }

    async fn cancel(&self, handle: &str) -> Result<(), DeliveryError> {
        self.state.borrow_mut().entries.retain(|e| e.handle != handle);
        Ok(())
    }

    async fn cancel_all(&self) -> Result<(), DeliveryError> {
        self.state.borrow_mut().entries.clear();
        Ok(())
    }
}

/// Cloneable registry fake backed by shared state.
#[derive(Clone, Default)]
struct SharedRegistry {
    tags: Rc<RefCell<BTreeSet<ReminderTag>>>,
}

impl SharedRegistry {
    fn snapshot(&self) -> BTreeSet<ReminderTag> {
        self.tags.borrow().clone()
    }

    fn with_tags(tags: impl IntoIterator<Item = ReminderTag>) -> Self {
        let registry = Self::default();
        *registry.tags.borrow_mut() = tags.into_iter().collect();
        registry
    }
}

impl ReminderRegistry for SharedRegistry {
    async fn read(&self) -> Result<BTreeSet<ReminderTag>, RegistryError> {
        Ok(self.tags.borrow().clone())
    }

    async fn write(&self, tags: &BTreeSet<ReminderTag>) -> Result<(), RegistryError> {
        *self.tags.borrow_mut() = tags.clone();
        Ok(())
    }
}

/// Registry fake that is always unreachable.
struct BrokenRegistry;

impl ReminderRegistry for BrokenRegistry {
    async fn read(&self) -> Result<BTreeSet<ReminderTag>, RegistryError> {
        Err(RegistryError::ReadFailed("store offline".to_string()))
    }

    async fn write(&self, _tags: &BTreeSet<ReminderTag>) -> Result<(), RegistryError> {
        Err(RegistryError::WriteFailed("store offline".to_string()))
    }
}

/// Status store fake with an optional snapshot.
struct FakeStatusStore {
    snapshot: Option<Snapshot>,
}

impl FakeStatusStore {
    fn empty() -> Self {
        Self { snapshot: None }
    }
}

impl StatusStore for FakeStatusStore {
    async fn latest_snapshot(&self) -> Result<Option<Snapshot>, StorageError> {
        Ok(self.snapshot)
    }
}

fn noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

fn seeded_settings() -> SchedulerSettings {
    SchedulerSettings {
        seed: Some(7),
        ..SchedulerSettings::default()
    }
}

fn manager(
    delivery: FakeDelivery,
    registry: SharedRegistry,
) -> ScheduleManager<FakeDelivery, SharedRegistry, FakeStatusStore> {
    ScheduleManager::new(delivery, registry, FakeStatusStore::empty(), seeded_settings())
        .with_clock(noon)
}

#[tokio::test]
async fn enable_schedules_and_registers() {
    let delivery = FakeDelivery::new();
    let registry = SharedRegistry::default();
    let mut manager = manager(delivery.clone(), registry.clone());

    // hunger at 0.9 is High tier: 360 minutes past noon is 18:00
    let target = manager.enable(Dimension::Hunger, 0.9).await.unwrap();
    assert_eq!(target, ScheduledTarget { hour: 18, minute: 0 });

    let entries = delivery.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].tag, ReminderTag::Status(Dimension::Hunger));
    assert_eq!(entries[0].title, "❤️ Moodlets Update! ❤️");
    assert!(entries[0].body.contains("hunger"));
    assert_eq!(
        entries[0].trigger,
        Trigger::AtClockTime { hour: 18, minute: 0, repeats: false }
    );
    assert!(registry.snapshot().contains(&ReminderTag::Status(Dimension::Hunger)));
}

#[tokio::test]
async fn second_enable_on_same_slot_shifts_thirty_minutes() {
    let delivery = FakeDelivery::new();
    let registry = SharedRegistry::default();
    // Thirst and energy tuned to plan the same slot at High tier
    let mut settings = seeded_settings();
    settings.delays.thirst.high = 120;
    settings.delays.energy.high = 120;
    let mut manager =
        ScheduleManager::new(delivery.clone(), registry, FakeStatusStore::empty(), settings)
            .with_clock(noon);

    let first = manager.enable(Dimension::Thirst, 0.9).await.unwrap();
    let second = manager.enable(Dimension::Energy, 0.9).await.unwrap();

    assert_eq!(first, ScheduledTarget { hour: 14, minute: 0 });
    assert_eq!(second, ScheduledTarget { hour: 14, minute: 30 });
    assert_eq!(delivery.entries().len(), 2);
}

#[tokio::test]
async fn relative_platform_gets_seconds_until_next_occurrence() {
    let delivery = FakeDelivery::relative();
    let registry = SharedRegistry::default();
    let mut manager = ScheduleManager::new(
        delivery.clone(),
        registry,
        FakeStatusStore::empty(),
        seeded_settings(),
    )
    .with_clock(noon);

    manager.enable(Dimension::Hunger, 0.9).await.unwrap();

    let entries = delivery.entries();
    assert_eq!(
        entries[0].trigger,
        Trigger::AfterSeconds { seconds: 6 * 3600, repeats: false }
    );
}

#[tokio::test]
async fn disable_cancels_only_matching_tag() {
    let delivery = FakeDelivery::new();
    let registry = SharedRegistry::default();
    let mut manager = manager(delivery.clone(), registry.clone());

    manager.enable(Dimension::Hunger, 0.9).await.unwrap();
    manager.enable(Dimension::Fun, 0.9).await.unwrap();
    manager.disable(Dimension::Hunger).await.unwrap();

    let entries = delivery.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].tag, ReminderTag::Status(Dimension::Fun));
    let tags = registry.snapshot();
    assert!(!tags.contains(&ReminderTag::Status(Dimension::Hunger)));
    assert!(tags.contains(&ReminderTag::Status(Dimension::Fun)));
}

#[tokio::test]
async fn permission_denial_leaves_registry_untouched() {
    let delivery = FakeDelivery::denying();
    let registry = SharedRegistry::default();
    let mut manager = manager(delivery.clone(), registry.clone());

    let result = manager.enable(Dimension::Social, 0.4).await;
    assert!(matches!(
        result,
        Err(CoreError::Delivery(DeliveryError::PermissionDenied))
    ));
    assert!(registry.snapshot().is_empty());
    assert_eq!(delivery.requests(), 0);
}

#[tokio::test]
async fn ensure_daily_is_idempotent() {
    let delivery = FakeDelivery::new();
    let registry = SharedRegistry::default();
    let mut manager = manager(delivery.clone(), registry.clone());

    assert!(manager.ensure_daily().await.unwrap());
    assert!(!manager.ensure_daily().await.unwrap());

    assert_eq!(delivery.requests(), 1);
    let entries = delivery.entries();
    assert_eq!(entries[0].tag, ReminderTag::Daily);
    assert_eq!(entries[0].title, "❤️ Moodlets Reminder! ❤️");
    assert_eq!(entries[0].body, "How are you feeling today?");
    assert_eq!(
        entries[0].trigger,
        Trigger::AtClockTime { hour: 9, minute: 0, repeats: true }
    );
}

#[tokio::test]
async fn disable_all_then_ensure_daily_leaves_exactly_daily() {
    let delivery = FakeDelivery::new();
    let registry = SharedRegistry::default();
    let mut manager = manager(delivery.clone(), registry.clone());

    manager.enable(Dimension::Hunger, 0.9).await.unwrap();
    manager.enable(Dimension::Thirst, 0.3).await.unwrap();
    manager.ensure_daily().await.unwrap();

    manager.disable_all().await.unwrap();
    assert!(registry.snapshot().is_empty());
    assert!(delivery.entries().is_empty());

    let requests_before = delivery.requests();
    manager.ensure_daily().await.unwrap();

    let tags = registry.snapshot();
    assert_eq!(tags.len(), 1);
    assert!(tags.contains(&ReminderTag::Daily));
    assert_eq!(delivery.requests(), requests_before + 1);
}

#[tokio::test]
async fn recompute_on_save_refreshes_enabled_dimensions() {
    let delivery = FakeDelivery::new();
    let registry = SharedRegistry::with_tags([
        ReminderTag::Daily,
        ReminderTag::Status(Dimension::Hunger),
        ReminderTag::Status(Dimension::Thirst),
    ]);
    let mut manager = manager(delivery.clone(), registry.clone());

    manager.ensure_daily().await.unwrap();
    // Stale per-dimension entry from an earlier save
    manager.enable(Dimension::Hunger, 0.9).await.unwrap();

    let mut vector = StatusVector::default();
    vector.set(Dimension::Hunger, 0.3);
    vector.set(Dimension::Thirst, 0.6);
    manager.recompute_on_save(&vector).await.unwrap();

    let entries = delivery.entries();
    // Daily survives; hunger and thirst are rescheduled from the new values
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().any(|e| e.tag == ReminderTag::Daily));

    // hunger at 0.3 is Low tier: 45 minutes past noon
    let hunger = entries
        .iter()
        .find(|e| e.tag == ReminderTag::Status(Dimension::Hunger))
        .unwrap();
    assert_eq!(hunger.target, ScheduledTarget { hour: 12, minute: 45 });

    // thirst at 0.6 is Mid tier: 60 minutes past noon
    let thirst = entries
        .iter()
        .find(|e| e.tag == ReminderTag::Status(Dimension::Thirst))
        .unwrap();
    assert_eq!(thirst.target, ScheduledTarget { hour: 13, minute: 0 });

    // Fun was never in the registry, so it was not scheduled
    assert!(!entries.iter().any(|e| e.tag == ReminderTag::Status(Dimension::Fun)));
}

#[tokio::test]
async fn registry_outage_degrades_to_empty_but_still_schedules() {
    let delivery = FakeDelivery::new();
    let mut manager = ScheduleManager::new(
        delivery.clone(),
        BrokenRegistry,
        FakeStatusStore::empty(),
        seeded_settings(),
    )
    .with_clock(noon);

    // The delivery request still goes out; the failed registry write is
    // non-fatal degraded state.
    let target = manager.enable(Dimension::Energy, 0.9).await.unwrap();
    assert_eq!(delivery.entries().len(), 1);
    assert_eq!(target.hour, 6);

    let states = manager.reminder_states().await;
    assert_eq!(states, Default::default());
}

#[tokio::test]
async fn current_vector_decays_stale_snapshot() {
    let now_local = noon();
    let created = now_local.with_timezone(&Utc) - Duration::hours(5);
    let store = FakeStatusStore {
        snapshot: Some(Snapshot::new(StatusVector::default(), created)),
    };
    let manager = ScheduleManager::new(
        FakeDelivery::new(),
        SharedRegistry::default(),
        store,
        seeded_settings(),
    )
    .with_clock(noon);

    let vector = manager.current_vector().await;
    // hunger: 1.0 * 0.8^5
    assert!((vector.get(Dimension::Hunger) - 0.32768).abs() < 1e-9);
}

#[tokio::test]
async fn current_vector_defaults_when_store_is_empty() {
    let manager = ScheduleManager::new(
        FakeDelivery::new(),
        SharedRegistry::default(),
        FakeStatusStore::empty(),
        seeded_settings(),
    );
    assert_eq!(manager.current_vector().await, StatusVector::default());
}

#[tokio::test]
async fn reminder_states_reflect_registry() {
    let registry = SharedRegistry::with_tags([
        ReminderTag::Daily,
        ReminderTag::Status(Dimension::Social),
    ]);
    let manager = ScheduleManager::new(
        FakeDelivery::new(),
        registry,
        FakeStatusStore::empty(),
        seeded_settings(),
    );

    let states = manager.reminder_states().await;
    assert!(states.daily);
    assert!(states.social);
    assert!(!states.hunger);
    assert!(manager.is_enabled(ReminderTag::Daily).await);
    assert!(!manager.is_enabled(ReminderTag::Status(Dimension::Fun)).await);
}
