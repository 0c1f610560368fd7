use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::store::EventStore;
use crate::view::html::PageMeta;

/// Source of "now" for classification.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always answers the same instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shared by every request; built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
    pub clock: Arc<dyn Clock>,
    pub page: PageMeta,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>, page: PageMeta) -> Self {
        Self { store, clock, page }
    }
}
