//! Event record store.
//!
//! The listing view only depends on [`EventStore`]; the server holds one
//! `Arc<dyn EventStore>` for the life of the process, and tests hand in
//! their own implementation.

use std::cmp::Ordering;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db::{
    initialize::init_db, log::dblog, migrate::latest_version, pool::DbPool, queries,
};
use crate::errors::AppResult;
use crate::models::event::{Event, NewEvent};
use crate::utils::date::parse_event_date;

pub trait EventStore: Send + Sync {
    /// Every stored event, ascending by calendar date.
    fn find_all_ordered_by_date(&self) -> AppResult<Vec<Event>>;
}

pub struct SqliteEventStore {
    pool: DbPool,
}

impl SqliteEventStore {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        debug!(path, "opening event store");
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        pool.with_conn(|conn| {
            let applied = init_db(conn)?;
            if applied > 0 {
                log_non_blocking(
                    conn,
                    "migrate",
                    "schema",
                    &format!("applied {applied} migration(s), now at v{}", latest_version()),
                );
            }
            Ok(())
        })?;
        Ok(Self { pool })
    }

    /// Append an operational line to the internal `log` table.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.pool.with_conn(|conn| dblog(conn, operation, target, message))
    }

    pub fn insert(&self, ev: &NewEvent) -> AppResult<Event> {
        self.pool.with_conn(|conn| {
            let stored = queries::insert_event(conn, ev)?;
            log_non_blocking(conn, "insert", &stored.id.to_string(), &stored.title);
            Ok(stored)
        })
    }

    pub fn count(&self) -> AppResult<i64> {
        self.pool
            .with_conn(|conn| Ok(queries::count_events(conn)?))
    }

    pub fn recent_log(&self, limit: usize) -> AppResult<Vec<(String, String, String)>> {
        self.pool
            .with_conn(|conn| crate::db::log::load_log(conn, limit))
    }
}

impl EventStore for SqliteEventStore {
    fn find_all_ordered_by_date(&self) -> AppResult<Vec<Event>> {
        let mut events = self.pool.with_conn(|conn| queries::load_events_by_date(conn))?;
        sort_by_calendar_date(&mut events);
        Ok(events)
    }
}

/// Stable sort on the parsed date. Unparseable dates go last, in the
/// order the query returned them.
pub fn sort_by_calendar_date(events: &mut [Event]) {
    events.sort_by(|a, b| {
        match (parse_event_date(&a.date), parse_event_date(&b.date)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

fn log_non_blocking(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = dblog(conn, operation, target, message) {
        warn!(error = %e, operation, "failed to write internal log");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_event(title: &str, date: &str) -> NewEvent {
        NewEvent::new(title, "desc", date, "18:00", "https://example.org", "pid")
    }

    #[test]
    fn empty_store_returns_nothing() {
        let store = SqliteEventStore::open_in_memory().unwrap();
        assert!(store.find_all_ordered_by_date().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn insert_assigns_ids_and_logs() {
        let store = SqliteEventStore::open_in_memory().unwrap();
        let a = store.insert(&new_event("A", "2024-01-01")).unwrap();
        let b = store.insert(&new_event("B", "2024-01-02")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.count().unwrap(), 2);

        let log = store.recent_log(10).unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].1, "insert");
        assert_eq!(log[0].2, "B");
        assert_eq!(log[2].1, "migrate");
    }

    #[test]
    fn reopening_a_migrated_database_logs_no_new_migration() {
        let path = std::env::temp_dir().join("store_reopen_clubevents.sqlite");
        let path = path.to_string_lossy().to_string();
        std::fs::remove_file(&path).ok();

        SqliteEventStore::open(&path).unwrap();
        let store = SqliteEventStore::open(&path).unwrap();
        store.record("init", &path, "Database initialized").unwrap();

        let ops: Vec<String> = store.recent_log(10).unwrap().into_iter().map(|r| r.1).collect();
        assert_eq!(ops, ["init", "migrate"]);
    }

    #[test]
    fn rejected_insert_writes_nothing() {
        let store = SqliteEventStore::open_in_memory().unwrap();
        let mut bad = new_event("A", "2024-01-01");
        bad.registration.clear();

        assert!(store.insert(&bad).is_err());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn ordering_follows_the_calendar_not_the_string() {
        let store = SqliteEventStore::open_in_memory().unwrap();
        store.insert(&new_event("late", "2024-05-02T09:00:00+09:00")).unwrap();
        store.insert(&new_event("broken", "TBA")).unwrap();
        store.insert(&new_event("early", "2024-05-01T23:00:00Z")).unwrap();
        store.insert(&new_event("earliest", "2023-12-31")).unwrap();

        let titles: Vec<String> = store
            .find_all_ordered_by_date()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();

        // "late" is 2024-05-02T00:00Z, one hour after "early".
        assert_eq!(titles, ["earliest", "early", "late", "broken"]);
    }
}
