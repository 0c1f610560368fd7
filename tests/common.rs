#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use clubevents::models::event::NewEvent;
use clubevents::store::SqliteEventStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ce() -> Command {
    let mut cmd = cargo_bin_cmd!("clubevents");
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clubevents.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn new_event(title: &str, date: &str) -> NewEvent {
    NewEvent::new(
        title,
        format!("{title} description"),
        date,
        "18:00 - 20:00",
        "https://example.org/register",
        format!("events/{}", title.to_lowercase().replace(' ', "-")),
    )
}

/// Initialize DB and add one past and one far-future event.
pub fn init_db_with_data(db_path: &str) {
    ce().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let store = SqliteEventStore::open(db_path).expect("open store");
    store
        .insert(&new_event("Future Jam", "2099-01-01").with_venue("Lab 3"))
        .expect("insert future");
    store
        .insert(&new_event("Old Hack", "2020-01-01").with_category("Hackathon"))
        .expect("insert past");
}
