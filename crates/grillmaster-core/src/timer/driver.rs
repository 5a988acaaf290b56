//! Timer driver: the side-effecting boundary around the pure store.
//!
//! The driver owns persistence (restore at startup, full-replace save
//! after every mutation) and hands notifications to the sink. It also
//! performs the input validation the store itself does not.
//!
//! Time-based mutation comes from exactly one place, [`run`], which
//! fires [`Driver::tick`] once per wall-clock second. User-initiated
//! operations interleave with ticks but never overlap them.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::events::{Event, NotificationSink};
use crate::storage::SnapshotFile;
use crate::timer::store::{TickOutcome, Timer, TimerAction, TimerStore, TimerUpdate};

/// Input for creating a timer. Validated before the store sees it.
#[derive(Debug, Clone)]
pub struct TimerSpec {
    pub name: String,
    /// Countdown length in whole seconds.
    pub duration: u64,
    /// Seconds between flip reminders, if any.
    pub flip_interval: Option<u64>,
    pub notes: Option<String>,
}

/// Owns the canonical timer store, its snapshot file, and the
/// notification sink.
pub struct Driver<S: NotificationSink> {
    store: TimerStore,
    snapshot: SnapshotFile,
    sink: S,
}

impl<S: NotificationSink> Driver<S> {
    /// Restore persisted timers and take over as the single writer.
    ///
    /// A missing snapshot starts an empty sequence. A malformed one
    /// does too: losing in-progress timers is recoverable, refusing
    /// to launch is not.
    pub fn open(snapshot: SnapshotFile, sink: S) -> Result<Self> {
        let timers = match snapshot.load() {
            Ok(Some(timers)) => timers,
            Ok(None) | Err(_) => Vec::new(),
        };
        let mut store = TimerStore::new();
        store.apply(TimerAction::LoadAll(timers));
        let driver = Self {
            store,
            snapshot,
            sink,
        };
        driver.persist()?;
        Ok(driver)
    }

    /// Read-only view of the live ordered sequence.
    pub fn timers(&self) -> &[Timer] {
        self.store.timers()
    }

    pub fn get(&self, id: Uuid) -> Option<&Timer> {
        self.store.get(id)
    }

    /// Validate and add a new timer, notifying that it started.
    pub fn add(&mut self, spec: TimerSpec) -> Result<Timer> {
        validate(&spec)?;
        let timer = Timer::new(spec.name, spec.duration, spec.flip_interval, spec.notes);
        self.store.apply(TimerAction::Add(timer.clone()));
        self.persist()?;
        self.sink.notify(&Event::Started {
            name: timer.name.clone(),
            duration: timer.duration,
            at: Utc::now(),
        });
        Ok(timer)
    }

    /// Suspend ticking for one timer. Silent no-op on an absent id.
    pub fn pause(&mut self, id: Uuid) -> Result<()> {
        self.set_paused(id, true)
    }

    /// Resume ticking for one timer. Silent no-op on an absent id.
    pub fn resume(&mut self, id: Uuid) -> Result<()> {
        self.set_paused(id, false)
    }

    fn set_paused(&mut self, id: Uuid, paused: bool) -> Result<()> {
        let name = match self.store.get(id) {
            // Complete is terminal: pause state is irrelevant there.
            Some(timer) if timer.is_active => timer.name.clone(),
            _ => return Ok(()),
        };
        self.store.apply(TimerAction::UpdateFields {
            id,
            fields: TimerUpdate::paused(paused),
        });
        self.persist()?;
        let at = Utc::now();
        self.sink.notify(&if paused {
            Event::Paused { name, at }
        } else {
            Event::Resumed { name, at }
        });
        Ok(())
    }

    /// Merge a constrained field update into one timer.
    /// Silent no-op on an absent id.
    pub fn update_fields(&mut self, id: Uuid, fields: TimerUpdate) -> Result<()> {
        self.store.apply(TimerAction::UpdateFields { id, fields });
        self.persist()
    }

    /// Remove a timer. Silent no-op on an absent id.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let name = match self.store.get(id) {
            Some(timer) => timer.name.clone(),
            None => return Ok(()),
        };
        self.store.apply(TimerAction::Delete(id));
        self.persist()?;
        self.sink.notify(&Event::Deleted {
            name,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Advance every active, unpaused timer by one second, persist,
    /// and raise a notification per crossed boundary.
    pub fn tick(&mut self) -> Result<Vec<Event>> {
        let outcomes = self.store.apply(TimerAction::Tick);
        self.persist()?;
        let at = Utc::now();
        let events: Vec<Event> = outcomes
            .into_iter()
            .map(|outcome| match outcome {
                TickOutcome::FlipDue { name, .. } => Event::FlipDue { name, at },
                TickOutcome::Completed { name, .. } => Event::Completed { name, at },
            })
            .collect();
        for event in &events {
            self.sink.notify(event);
        }
        Ok(events)
    }

    fn persist(&self) -> Result<()> {
        self.snapshot.save(self.store.timers())?;
        Ok(())
    }
}

fn validate(spec: &TimerSpec) -> Result<(), ValidationError> {
    if spec.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if spec.duration == 0 {
        return Err(ValidationError::NonPositiveDuration);
    }
    if spec.flip_interval == Some(0) {
        return Err(ValidationError::NonPositiveFlipInterval);
    }
    Ok(())
}

/// Drive [`Driver::tick`] once per wall-clock second until `shutdown`
/// flips to true (or its sender is dropped).
///
/// Missed intervals are skipped rather than burst: the engine promises
/// one-second resolution, not real-time catch-up.
pub async fn run<S: NotificationSink>(
    driver: &mut Driver<S>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first interval fires immediately; consume it so the first
    // real tick lands a full second after startup.
    interval.tick().await;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                driver.tick()?;
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    return Ok(());
                }
            }
        }
    }
}
