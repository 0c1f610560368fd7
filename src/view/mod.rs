//! Event listing view model.
//!
//! `EventListing::build` is the pure part of the page: it takes the store's
//! events and a reference instant and decides everything the renderers show.
//! `html` and `text` only turn that model into markup.

pub mod html;
pub mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::event::{Event, EventId};
use crate::models::status::EventStatus;
use crate::utils::date::{event_calendar_date, format_long_date};

/// Wrap width used when clamping descriptions.
pub const EXCERPT_WIDTH: usize = 60;
/// Number of wrapped lines kept from a description.
pub const EXCERPT_LINES: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct EventListing {
    pub total: usize,
    pub upcoming: usize,
    pub cards: Vec<EventCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCard {
    pub id: EventId,
    pub status: EventStatus,
    pub category: Option<String>,
    pub title: String,
    pub date_display: String,
    pub time: String,
    pub venue: Option<String>,
    pub excerpt: String,
    /// Detail route, present only for upcoming events.
    pub register_href: Option<String>,
}

impl EventListing {
    pub fn build(events: &[Event], now: DateTime<Utc>) -> Self {
        let cards: Vec<EventCard> = events.iter().map(|e| EventCard::build(e, now)).collect();
        let upcoming = cards.iter().filter(|c| c.status.is_upcoming()).count();

        Self {
            total: events.len(),
            upcoming,
            cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl EventCard {
    pub fn build(event: &Event, now: DateTime<Utc>) -> Self {
        let status = EventStatus::classify(event, now);
        let date_display = event_calendar_date(&event.date)
            .map(|d| format_long_date(&d))
            .unwrap_or_else(|| event.date.clone());

        Self {
            id: event.id,
            status,
            category: event.category.clone(),
            title: event.title.clone(),
            date_display,
            time: event.time.clone(),
            venue: event.venue.clone(),
            excerpt: excerpt(&event.description),
            register_href: status.is_upcoming().then(|| detail_href(event.id)),
        }
    }
}

pub fn detail_href(id: EventId) -> String {
    format!("/events/{id}")
}

/// First `EXCERPT_LINES` wrapped lines of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str) -> String {
    let lines = textwrap::wrap(text.trim(), EXCERPT_WIDTH);
    if lines.len() <= EXCERPT_LINES {
        return lines.join(" ");
    }

    let mut out = lines[..EXCERPT_LINES].join(" ");
    out.push('…');
    out
}
