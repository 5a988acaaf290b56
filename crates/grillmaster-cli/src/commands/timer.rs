use clap::Subcommand;
use grillmaster_core::{Driver, Event, NotificationSink, SnapshotFile, Timer, TimerSpec};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Add a new countdown timer
    Add {
        /// Timer label
        #[arg(long)]
        name: String,
        /// Countdown length in seconds
        #[arg(long)]
        duration: u64,
        /// Seconds between flip reminders
        #[arg(long)]
        flip_interval: Option<u64>,
        /// Free-form note
        #[arg(long)]
        notes: Option<String>,
    },
    /// List timers
    List {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Pause a running timer
    Pause {
        /// Timer id
        id: Uuid,
    },
    /// Resume a paused timer
    Resume {
        /// Timer id
        id: Uuid,
    },
    /// Delete a timer
    Delete {
        /// Timer id
        id: Uuid,
    },
    /// Advance the countdowns by whole seconds
    Tick {
        /// Number of seconds to advance
        #[arg(long, default_value = "1")]
        count: u32,
    },
    /// Run the one-second loop until Ctrl-C, printing reminders
    Watch,
}

/// Prints each notification the way the app would toast it.
struct ToastSink;

impl NotificationSink for ToastSink {
    fn notify(&self, event: &Event) {
        println!("{}", event.message());
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = SnapshotFile::open()?;
    let mut driver = Driver::open(snapshot, ToastSink)?;

    match action {
        TimerAction::Add {
            name,
            duration,
            flip_interval,
            notes,
        } => {
            let timer = driver.add(TimerSpec {
                name,
                duration,
                flip_interval,
                notes,
            })?;
            println!("{}", serde_json::to_string_pretty(&timer)?);
        }
        TimerAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(driver.timers())?);
            } else {
                for timer in driver.timers() {
                    println!("{}", summarize(timer));
                }
            }
        }
        TimerAction::Pause { id } => driver.pause(id)?,
        TimerAction::Resume { id } => driver.resume(id)?,
        TimerAction::Delete { id } => driver.delete(id)?,
        TimerAction::Tick { count } => {
            for _ in 0..count {
                driver.tick()?;
            }
            for timer in driver.timers() {
                println!("{}", summarize(timer));
            }
        }
        TimerAction::Watch => watch(driver)?,
    }

    Ok(())
}

fn summarize(timer: &Timer) -> String {
    let state = if !timer.is_active {
        "done"
    } else if timer.is_paused {
        "paused"
    } else {
        "running"
    };
    let flip = timer
        .flip_remaining
        .map(|f| format!(", flip in {f}s"))
        .unwrap_or_default();
    format!(
        "{}  {:>6}s / {}s  [{state}{flip}]  {}",
        timer.id, timer.remaining_time, timer.duration, timer.name
    )
}

fn watch(mut driver: Driver<ToastSink>) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (tx, rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            let _ = tx.send(true);
        });
        grillmaster_core::run(&mut driver, rx).await
    })?;
    Ok(())
}
