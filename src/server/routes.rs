use std::sync::LazyLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use regex::Regex;
use tracing::{debug, info};

use super::state::AppState;
use crate::errors::AppResult;
use crate::view::EventListing;
use crate::view::html::render_page;

static LOCALE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("locale pattern is valid")
});

/// Checks the shape of a language tag only. Any two or three letter
/// segment passes, so `/api/events` renders with `lang="api"`.
pub fn is_locale(segment: &str) -> bool {
    LOCALE_RE.is_match(segment)
}

/// `GET /events`
pub async fn events_handler(State(state): State<AppState>) -> AppResult<Html<String>> {
    let lang = state.page.lang.clone();
    render_events(&state, &lang).await
}

/// `GET /{locale}/events`
pub async fn localized_events_handler(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<Response> {
    if !is_locale(&locale) {
        debug!(locale, "rejecting unknown locale segment");
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    Ok(render_events(&state, &locale).await?.into_response())
}

async fn render_events(state: &AppState, lang: &str) -> AppResult<Html<String>> {
    let store = state.store.clone();
    let events = tokio::task::spawn_blocking(move || store.find_all_ordered_by_date()).await??;

    let listing = EventListing::build(&events, state.clock.now());
    info!(
        total = listing.total,
        upcoming = listing.upcoming,
        lang,
        "rendered event listing"
    );

    Ok(Html(render_page(&listing, &state.page.with_lang(lang))))
}
