use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every user-visible state change produces an Event.
/// The driver hands events to a [`NotificationSink`]; the presentation
/// layer decides how they are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Event {
    Started {
        name: String,
        duration: u64,
        at: DateTime<Utc>,
    },
    Paused {
        name: String,
        at: DateTime<Utc>,
    },
    Resumed {
        name: String,
        at: DateTime<Utc>,
    },
    Deleted {
        name: String,
        at: DateTime<Utc>,
    },
    /// A timer's flip countdown hit zero this tick.
    FlipDue {
        name: String,
        at: DateTime<Utc>,
    },
    /// A timer's remaining time hit zero this tick.
    #[serde(rename = "complete")]
    Completed {
        name: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn timer_name(&self) -> &str {
        match self {
            Event::Started { name, .. }
            | Event::Paused { name, .. }
            | Event::Resumed { name, .. }
            | Event::Deleted { name, .. }
            | Event::FlipDue { name, .. }
            | Event::Completed { name, .. } => name,
        }
    }

    /// User-facing toast text.
    pub fn message(&self) -> String {
        match self {
            Event::Started { name, .. } => format!("Timer started for {name}!"),
            Event::Paused { .. } => "Timer paused".to_string(),
            Event::Resumed { .. } => "Timer resumed".to_string(),
            Event::Deleted { .. } => "Timer deleted".to_string(),
            Event::FlipDue { name, .. } => format!("Time to flip {name}!"),
            Event::Completed { name, .. } => format!("{name} is ready!"),
        }
    }
}

/// Destination for driver notifications.
///
/// Implementations must not block; the driver calls this synchronously
/// from the tick loop.
pub trait NotificationSink {
    fn notify(&self, event: &Event);
}

/// Sink that drops every notification. For headless use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _event: &Event) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_json_uses_kind_tags() {
        let event = Event::FlipDue {
            name: "Ribeye".into(),
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "flip-due");

        let event = Event::Completed {
            name: "Ribeye".into(),
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "complete");
    }

    #[test]
    fn messages_mention_the_timer_where_it_matters() {
        let at = Utc::now();
        let flip = Event::FlipDue {
            name: "Chicken Thighs".into(),
            at,
        };
        assert_eq!(flip.message(), "Time to flip Chicken Thighs!");

        let done = Event::Completed {
            name: "Chicken Thighs".into(),
            at,
        };
        assert_eq!(done.message(), "Chicken Thighs is ready!");
        assert_eq!(done.timer_name(), "Chicken Thighs");
    }
}
