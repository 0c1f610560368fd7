//! Versioned schema migrations.
//!
//! Each migration runs once inside a transaction and is recorded in
//! `schema_migrations`. New schema changes are appended to `MIGRATIONS`,
//! never edited in place.

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_events",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            title         TEXT NOT NULL CHECK (length(trim(title)) > 0),
            description   TEXT NOT NULL CHECK (length(trim(description)) > 0),
            date          TEXT NOT NULL CHECK (length(trim(date)) > 0),
            time          TEXT NOT NULL CHECK (length(trim(time)) > 0),
            registration  TEXT NOT NULL CHECK (length(trim(registration)) > 0),
            public_id     TEXT NOT NULL CHECK (length(trim(public_id)) > 0),
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        "#,
    },
    Migration {
        version: 2,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 3,
        name: "add_event_display_fields",
        sql: r#"
        ALTER TABLE events ADD COLUMN category TEXT;
        ALTER TABLE events ADD COLUMN venue TEXT;
        "#,
    },
];

fn ensure_migrations_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )
}

/// Highest applied migration version, 0 on a fresh database.
pub fn current_version(conn: &Connection) -> AppResult<i64> {
    ensure_migrations_table(conn)?;
    let v: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();
    Ok(v.unwrap_or(0))
}

/// Apply every migration newer than the recorded version.
/// Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &mut Connection) -> AppResult<usize> {
    let from = current_version(conn)?;
    let mut applied = 0;

    for m in MIGRATIONS.iter().filter(|m| m.version > from) {
        debug!(version = m.version, name = m.name, "applying migration");

        let tx = conn.transaction()?;
        tx.execute_batch(m.sql).map_err(|e| {
            AppError::Migration(format!("{} (v{}): {}", m.name, m.version, e))
        })?;
        tx.execute(
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
            params![m.version, m.name, chrono::Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;

        applied += 1;
    }

    if applied > 0 {
        info!(applied, version = latest_version(), "database schema migrated");
    }

    Ok(applied)
}

pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_reaches_latest_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        let applied = run_pending_migrations(&mut conn).unwrap();
        assert_eq!(applied, MIGRATIONS.len());
        assert_eq!(current_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&mut conn).unwrap();
        assert_eq!(run_pending_migrations(&mut conn).unwrap(), 0);
    }

    #[test]
    fn schema_rejects_blank_required_columns() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&mut conn).unwrap();

        let res = conn.execute(
            "INSERT INTO events (title, description, date, time, registration, public_id, created_at, updated_at)
             VALUES ('', 'd', '2024-01-01', '10:00', 'r', 'p', 'x', 'x')",
            [],
        );
        assert!(res.is_err());
    }
}
