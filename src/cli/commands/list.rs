use chrono::Utc;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{EventStore, SqliteEventStore};
use crate::utils::date::parse_reference_now;
use crate::view::EventListing;
use crate::view::{html, text};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        html: as_html,
        json: as_json,
        now,
        no_color,
    } = cmd
    {
        let store = SqliteEventStore::open(&cfg.database)?;

        let now = match now {
            Some(s) => parse_reference_now(s).map_err(AppError::InvalidDate)?,
            None => Utc::now(),
        };

        let events = store.find_all_ordered_by_date()?;
        let listing = EventListing::build(&events, now);

        if *as_html {
            print!("{}", html::render_page(&listing, &cfg.page_meta()));
        } else if *as_json {
            let json = serde_json::to_string_pretty(&listing)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{json}");
        } else {
            print!("{}", text::render_listing(&listing, !*no_color));
        }
    }
    Ok(())
}
