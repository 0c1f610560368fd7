use crate::errors::AppResult;
use crate::models::event::{Event, NewEvent};
use chrono::Utc;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

const EVENT_COLUMNS: &str = "id, title, description, date, time, registration, public_id, \
                             category, venue, created_at, updated_at";

/// All events, ordered by the raw `date` column then by id.
/// Callers wanting calendar order re-sort on the parsed date.
pub fn load_events_by_date(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC, id ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_events(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
}

pub fn map_row(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        date: row.get("date")?,
        time: row.get("time")?,
        registration: row.get("registration")?,
        public_id: row.get("public_id")?,
        category: row.get("category")?,
        venue: row.get("venue")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Validate and insert. Nothing is written when a required field is blank.
pub fn insert_event(conn: &Connection, ev: &NewEvent) -> AppResult<Event> {
    ev.validate()?;

    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO events (title, description, date, time, registration, public_id, category, venue, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            ev.title,
            ev.description,
            ev.date,
            ev.time,
            ev.registration,
            ev.public_id,
            crate::models::event::non_blank(ev.category.clone()),
            crate::models::event::non_blank(ev.venue.clone()),
            now,
            now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    Ok(ev.clone().into_event(id, &now)?)
}
