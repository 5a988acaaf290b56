//! Timer store: the pure transition function over the timer set.
//!
//! State is an ordered sequence of timers; insertion order is display
//! order. Every mutation goes through [`step`], a pure function from
//! `(state, action)` to the next state plus the boundaries the tick
//! crossed. The store carries no clock and no storage -- the driver
//! owns those side effects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One active or completed countdown.
///
/// Serialized field names follow the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: Uuid,
    pub name: String,
    /// Total countdown length in whole seconds. Fixed at creation.
    pub duration: u64,
    /// Seconds left. Non-increasing while running, floored at 0.
    pub remaining_time: u64,
    /// Seconds between flip reminders, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_interval: Option<u64>,
    /// Seconds until the next flip reminder. Present iff `flip_interval` is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_remaining: Option<u64>,
    /// True from creation until the countdown reaches zero.
    /// Never set back to true once false.
    pub is_active: bool,
    pub is_paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp. Informational only -- the countdown is
    /// integer-decrement based, not derived from wall-clock deltas.
    pub start_time: DateTime<Utc>,
}

impl Timer {
    /// Construct a fresh running timer.
    ///
    /// Seeds `flip_remaining` from `flip_interval` and assigns a new id.
    /// Performs no validation; callers go through the driver, which does.
    pub fn new(
        name: String,
        duration: u64,
        flip_interval: Option<u64>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            duration,
            remaining_time: duration,
            flip_interval,
            flip_remaining: flip_interval,
            is_active: true,
            is_paused: false,
            notes,
            start_time: Utc::now(),
        }
    }
}

/// The fields `UpdateFields` may touch. Everything else is fixed at
/// creation or owned by the tick algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerUpdate {
    pub is_paused: Option<bool>,
    pub remaining_time: Option<u64>,
    pub flip_remaining: Option<u64>,
}

impl TimerUpdate {
    pub fn paused(value: bool) -> Self {
        Self {
            is_paused: Some(value),
            ..Self::default()
        }
    }
}

/// Tagged transition over the timer sequence.
#[derive(Debug, Clone)]
pub enum TimerAction {
    Add(Timer),
    UpdateFields { id: Uuid, fields: TimerUpdate },
    Delete(Uuid),
    Tick,
    LoadAll(Vec<Timer>),
}

/// Boundary crossed by a timer during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Flip countdown hit zero; reminder due, counter reset.
    FlipDue { id: Uuid, name: String },
    /// Remaining time hit zero; the timer is done.
    Completed { id: Uuid, name: String },
}

/// Apply one action to the timer sequence, returning the next sequence
/// and any boundaries crossed. Pure: no clock, no storage, no id
/// generation.
pub fn step(timers: Vec<Timer>, action: TimerAction) -> (Vec<Timer>, Vec<TickOutcome>) {
    match action {
        TimerAction::Add(timer) => {
            let mut next = timers;
            next.push(timer);
            (next, Vec::new())
        }
        TimerAction::UpdateFields { id, fields } => {
            let next = timers
                .into_iter()
                .map(|t| if t.id == id { apply_update(t, &fields) } else { t })
                .collect();
            (next, Vec::new())
        }
        TimerAction::Delete(id) => {
            let next = timers.into_iter().filter(|t| t.id != id).collect();
            (next, Vec::new())
        }
        TimerAction::Tick => tick(timers),
        TimerAction::LoadAll(loaded) => (loaded, Vec::new()),
    }
}

fn apply_update(mut timer: Timer, fields: &TimerUpdate) -> Timer {
    if let Some(paused) = fields.is_paused {
        timer.is_paused = paused;
    }
    if let Some(remaining) = fields.remaining_time {
        timer.remaining_time = remaining;
    }
    // flip_remaining only exists for timers that have a flip interval.
    if timer.flip_interval.is_some() {
        if let Some(flip) = fields.flip_remaining {
            timer.flip_remaining = Some(flip);
        }
    }
    timer
}

/// Advance every active, unpaused timer by one second.
///
/// The flip boundary is checked before the completion boundary, so a
/// timer whose flip countdown and remaining time hit zero on the same
/// tick takes the flip branch and stays active with `remaining_time`
/// stuck at zero. It then completes on the following tick, one second
/// late (or never, for a flip interval of one). This matches the
/// shipped behavior exactly.
fn tick(timers: Vec<Timer>) -> (Vec<Timer>, Vec<TickOutcome>) {
    let mut outcomes = Vec::new();
    let next = timers
        .into_iter()
        .map(|mut timer| {
            if !timer.is_active || timer.is_paused {
                return timer;
            }

            let new_remaining = timer.remaining_time.saturating_sub(1);
            let new_flip_remaining = timer.flip_remaining.map(|f| f.saturating_sub(1));

            if new_flip_remaining == Some(0) && timer.flip_interval.is_some() {
                outcomes.push(TickOutcome::FlipDue {
                    id: timer.id,
                    name: timer.name.clone(),
                });
                timer.remaining_time = new_remaining;
                // The flip counter restarts immediately after firing.
                timer.flip_remaining = timer.flip_interval;
                return timer;
            }

            if new_remaining == 0 {
                outcomes.push(TickOutcome::Completed {
                    id: timer.id,
                    name: timer.name.clone(),
                });
                timer.remaining_time = 0;
                timer.is_active = false;
                return timer;
            }

            timer.remaining_time = new_remaining;
            timer.flip_remaining = new_flip_remaining;
            timer
        })
        .collect();
    (next, outcomes)
}

/// Owner of the canonical timer sequence.
///
/// All other components hold read-only snapshots obtained through
/// [`TimerStore::timers`].
#[derive(Debug, Clone, Default)]
pub struct TimerStore {
    timers: Vec<Timer>,
}

impl TimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the live ordered sequence.
    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn get(&self, id: Uuid) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    /// Apply one action, returning the outcomes it produced.
    pub fn apply(&mut self, action: TimerAction) -> Vec<TickOutcome> {
        let (next, outcomes) = step(std::mem::take(&mut self.timers), action);
        self.timers = next;
        outcomes
    }
}
