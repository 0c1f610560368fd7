//! HTML rendering of the event listing.

use std::fmt::Write;

use super::{EventCard, EventListing};

pub const DEFAULT_TITLE: &str = "OIST - Programming Club Events";
pub const DEFAULT_DESCRIPTION: &str = "Upcoming and past events from the OIST Programming Club";
pub const EMPTY_HEADING: &str = "No events available";
pub const EMPTY_HINT: &str = "Check back later for upcoming events.";
pub const REGISTER_LABEL: &str = "Register Now";

/// Document-level metadata for the listing page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            lang: "en".to_string(),
        }
    }
}

impl PageMeta {
    pub fn with_lang(&self, lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            ..self.clone()
        }
    }
}

pub fn render_page(listing: &EventListing, meta: &PageMeta) -> String {
    let mut out = String::with_capacity(4096 + listing.cards.len() * 1024);

    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, "<html lang=\"{}\">", escape(&meta.lang));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(&meta.title));
    let _ = writeln!(
        out,
        "<meta name=\"description\" content=\"{}\">",
        escape(&meta.description)
    );
    out.push_str("</head>\n<body>\n<main class=\"events-page\">\n");

    render_header(&mut out, listing);

    if listing.is_empty() {
        render_empty_state(&mut out);
    } else {
        out.push_str("<section class=\"events-grid\">\n");
        for card in &listing.cards {
            render_card(&mut out, card);
        }
        out.push_str("</section>\n");
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn render_header(out: &mut String, listing: &EventListing) {
    out.push_str("<header class=\"events-header\">\n");
    out.push_str("<h1>Upcoming Events</h1>\n");
    out.push_str("<p>Discover and participate in exciting events</p>\n");
    let _ = writeln!(
        out,
        "<span class=\"badge badge-total\">Total Events: {}</span>",
        listing.total
    );
    let _ = writeln!(
        out,
        "<span class=\"badge badge-upcoming\">Upcoming: {}</span>",
        listing.upcoming
    );
    out.push_str("</header>\n");
}

fn render_empty_state(out: &mut String) {
    out.push_str("<section class=\"events-empty\">\n");
    let _ = writeln!(out, "<h3>{EMPTY_HEADING}</h3>");
    let _ = writeln!(out, "<p>{EMPTY_HINT}</p>");
    out.push_str("</section>\n");
}

fn render_card(out: &mut String, card: &EventCard) {
    let status_class = if card.status.is_upcoming() {
        "badge-success"
    } else {
        "badge-secondary"
    };

    let _ = writeln!(out, "<article class=\"event-card\" data-event-id=\"{}\">", card.id);
    let _ = writeln!(
        out,
        "<span class=\"badge {status_class}\">{}</span>",
        card.status.label()
    );
    let _ = writeln!(
        out,
        "<span class=\"badge badge-category\">{}</span>",
        escape(card.category.as_deref().unwrap_or_default())
    );
    let _ = writeln!(out, "<h2 class=\"event-title\">{}</h2>", escape(&card.title));
    let _ = writeln!(out, "<p class=\"event-date\">{}</p>", escape(&card.date_display));
    let _ = writeln!(out, "<p class=\"event-time\">{}</p>", escape(&card.time));
    let _ = writeln!(
        out,
        "<p class=\"event-venue\">{}</p>",
        escape(card.venue.as_deref().unwrap_or_default())
    );
    let _ = writeln!(out, "<p class=\"event-description\">{}</p>", escape(&card.excerpt));

    if let Some(href) = &card.register_href {
        let _ = writeln!(
            out,
            "<a class=\"button register\" href=\"{}\">{REGISTER_LABEL}</a>",
            escape(href)
        );
    }

    out.push_str("</article>\n");
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
