pub mod event;
pub mod status;

pub use event::{Event, EventId, NewEvent, ValidationError};
pub use status::EventStatus;
