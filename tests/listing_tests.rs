use chrono::{DateTime, TimeZone, Utc};
use clubevents::errors::AppResult;
use clubevents::models::event::Event;
use clubevents::models::status::EventStatus;
use clubevents::store::{EventStore, SqliteEventStore};
use clubevents::view::EventListing;
use clubevents::view::html::{EMPTY_HEADING, PageMeta, REGISTER_LABEL, render_page};

mod common;
use common::new_event;

/// Store that hands back a fixed sequence.
struct FakeStore(Vec<Event>);

impl EventStore for FakeStore {
    fn find_all_ordered_by_date(&self) -> AppResult<Vec<Event>> {
        Ok(self.0.clone())
    }
}

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn seeded_store(dates: &[(&str, &str)]) -> SqliteEventStore {
    let store = SqliteEventStore::open_in_memory().expect("in-memory store");
    for (title, date) in dates {
        store.insert(&new_event(title, date)).expect("insert");
    }
    store
}

#[test]
fn test_past_and_future_scenario() {
    let store = seeded_store(&[("Launch", "2099-01-01"), ("Kickoff", "2020-01-01")]);
    let events = store.find_all_ordered_by_date().unwrap();

    assert_eq!(events[0].date, "2020-01-01");
    assert_eq!(events[1].date, "2099-01-01");

    let listing = EventListing::build(&events, reference_now());
    assert_eq!(listing.cards[0].status, EventStatus::Past);
    assert_eq!(listing.cards[0].register_href, None);
    assert_eq!(listing.cards[1].status, EventStatus::Upcoming);
    assert_eq!(
        listing.cards[1].register_href,
        Some(format!("/events/{}", events[1].id))
    );
}

#[test]
fn test_store_results_are_ascending_by_date() {
    let store = seeded_store(&[
        ("c", "2024-03-01"),
        ("a", "2023-11-15"),
        ("d", "2025-01-01T10:00:00Z"),
        ("b", "2024-02-29"),
    ]);

    let events = store.find_all_ordered_by_date().unwrap();
    let dates: Vec<DateTime<Utc>> = events
        .iter()
        .map(|e| clubevents::utils::date::parse_event_date(&e.date).unwrap())
        .collect();

    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_status_matches_date_comparison_for_any_reference() {
    let store = seeded_store(&[
        ("a", "2019-06-01"),
        ("b", "2024-01-01"),
        ("c", "2024-01-02"),
        ("d", "2030-12-31"),
    ]);
    let events = store.find_all_ordered_by_date().unwrap();

    for now in [
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        reference_now(),
        Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap(),
    ] {
        let listing = EventListing::build(&events, now);
        for (event, card) in events.iter().zip(&listing.cards) {
            let expected = clubevents::utils::date::parse_event_date(&event.date).unwrap() > now;
            assert_eq!(card.status.is_upcoming(), expected, "{} at {now}", event.date);
        }
        assert_eq!(listing.total, events.len());
        assert_eq!(
            listing.upcoming,
            listing.cards.iter().filter(|c| c.status.is_upcoming()).count()
        );
    }
}

#[test]
fn test_empty_store_only_renders_empty_state() {
    let store = FakeStore(Vec::new());
    let events = store.find_all_ordered_by_date().unwrap();
    let listing = EventListing::build(&events, reference_now());

    assert!(listing.is_empty());
    let html = render_page(&listing, &PageMeta::default());
    assert!(html.contains(EMPTY_HEADING));
    assert!(!html.contains("event-card"));
    assert!(!html.contains(REGISTER_LABEL));
}

#[test]
fn test_fake_store_order_is_preserved_by_the_view() {
    let store = seeded_store(&[("x", "2099-05-05"), ("y", "2001-01-01")]);
    let mut events = store.find_all_ordered_by_date().unwrap();
    events.reverse();

    let fake = FakeStore(events.clone());
    let listing = EventListing::build(&fake.find_all_ordered_by_date().unwrap(), reference_now());
    let ids: Vec<i64> = listing.cards.iter().map(|c| c.id).collect();
    let expected: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, expected);
}
