mod driver;
mod store;

pub use driver::{run, Driver, TimerSpec};
pub use store::{step, TickOutcome, Timer, TimerAction, TimerStore, TimerUpdate};
