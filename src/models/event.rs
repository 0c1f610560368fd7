use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned by the store on insert (`events.id`).
pub type EventId = i64;

/// A stored club event.
///
/// Every required text field is guaranteed non-empty: the only way to create
/// a row is [`NewEvent`], which is validated before it reaches SQLite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,        // ⇔ events.title
    pub description: String,  // ⇔ events.description
    pub date: String,         // ⇔ events.date (free text, parsed on read)
    pub time: String,         // ⇔ events.time (free text, never parsed)
    pub registration: String, // ⇔ events.registration
    pub public_id: String,    // ⇔ events.public_id
    pub category: Option<String>,
    pub venue: Option<String>,
    pub created_at: String, // ⇔ events.created_at (RFC 3339)
    pub updated_at: String, // ⇔ events.updated_at (RFC 3339)
}

/// Fields a caller supplies when writing an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub registration: String,
    pub public_id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is missing or empty")]
    MissingField(&'static str),
}

impl NewEvent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        registration: impl Into<String>,
        public_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            time: time.into(),
            registration: registration.into(),
            public_id: public_id.into(),
            category: None,
            venue: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Checks the required fields in declaration order and reports the
    /// first one that is empty or whitespace only. Whitespace-only values
    /// are refused as well as empty ones, matching the schema CHECKs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("date", &self.date),
            ("time", &self.time),
            ("registration", &self.registration),
            ("public_id", &self.public_id),
        ];

        match required.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((name, _)) => Err(ValidationError::MissingField(*name)),
            None => Ok(()),
        }
    }

    /// Validates and attaches the store-assigned identity and timestamps.
    pub fn into_event(self, id: EventId, stamped_at: &str) -> Result<Event, ValidationError> {
        self.validate()?;
        Ok(Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            registration: self.registration,
            public_id: self.public_id,
            category: non_blank(self.category),
            venue: non_blank(self.venue),
            created_at: stamped_at.to_string(),
            updated_at: stamped_at.to_string(),
        })
    }
}

/// Optional display fields are stored as NULL rather than "".
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
