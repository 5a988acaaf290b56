//! # GrillMaster Core Library
//!
//! Core engine for the GrillMaster grilling companion: an arbitrary
//! number of independent cooking countdowns, each optionally emitting
//! periodic "flip" reminders, surviving restarts via a persisted JSON
//! snapshot.
//!
//! ## Architecture
//!
//! - **Timer Store**: a pure transition function over the ordered timer
//!   sequence (`Add | UpdateFields | Delete | Tick | LoadAll`)
//! - **Driver**: the side-effecting boundary -- restores the snapshot at
//!   startup, persists after every mutation, raises notifications for
//!   crossed flip/completion boundaries, and owns the one-second loop
//! - **Storage**: JSON snapshots for timers and settings, full-replace
//!   writes with a single writer
//!
//! The engine is an in-process library: presentation layers consume
//! [`Driver`] and a [`NotificationSink`], nothing else.
//!
//! ## Key Components
//!
//! - [`TimerStore`]: pure state machine over the timer sequence
//! - [`Driver`]: persistence and notification side effects
//! - [`SnapshotFile`]: the persisted timer sequence
//! - [`Settings`]: user preferences snapshot (consumed, not owned)

pub mod error;
pub mod events;
pub mod settings;
pub mod storage;
pub mod timer;

pub use error::{CoreError, Result, StorageError, ValidationError};
pub use events::{Event, NotificationSink, NullSink};
pub use settings::{Settings, TemperatureUnit};
pub use storage::SnapshotFile;
pub use timer::{run, Driver, TickOutcome, Timer, TimerAction, TimerSpec, TimerStore, TimerUpdate};
