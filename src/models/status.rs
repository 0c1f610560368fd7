use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::event::Event;
use crate::utils::date::parse_event_date;

/// Upcoming/past classification. Derived per render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

impl EventStatus {
    /// `Upcoming` iff the event's date lies strictly after `now`.
    /// A date that does not parse can never be after `now`, so it is `Past`.
    pub fn classify(event: &Event, now: DateTime<Utc>) -> Self {
        match parse_event_date(&event.date) {
            Some(at) if at > now => EventStatus::Upcoming,
            Some(_) => EventStatus::Past,
            None => {
                warn!(event_id = event.id, date = %event.date, "unparseable event date, treating as past");
                EventStatus::Past
            }
        }
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, EventStatus::Upcoming)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Past => "Past",
        }
    }
}
