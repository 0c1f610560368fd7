//! Terminal rendering of the event listing, used by `clubevents list`.

use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

use super::{EventCard, EventListing};
use crate::view::html::{EMPTY_HEADING, EMPTY_HINT};

const STATUS_WIDTH: usize = 10;

pub fn render_listing(listing: &EventListing, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&paint(Style::new().bold(), "Upcoming Events", color));
    out.push('\n');
    out.push_str(&format!(
        "Total Events: {} | Upcoming: {}\n\n",
        listing.total, listing.upcoming
    ));

    if listing.is_empty() {
        out.push_str(EMPTY_HEADING);
        out.push('\n');
        out.push_str(EMPTY_HINT);
        out.push('\n');
        return out;
    }

    for card in &listing.cards {
        render_card(&mut out, card, color);
    }

    out
}

fn render_card(out: &mut String, card: &EventCard, color: bool) {
    let status_style = if card.status.is_upcoming() {
        Colour::Green.bold()
    } else {
        Colour::Fixed(244).normal()
    };

    let status = pad_right(card.status.label(), STATUS_WIDTH);
    out.push_str(&paint(status_style, &status, color));
    out.push_str(&paint(Style::new().bold(), &card.title, color));
    if let Some(category) = &card.category {
        out.push_str(&format!(" [{}]", category));
    }
    out.push('\n');

    let indent = " ".repeat(STATUS_WIDTH);
    out.push_str(&format!("{indent}{} · {}", card.date_display, card.time));
    if let Some(venue) = &card.venue {
        out.push_str(&format!(" · {}", venue));
    }
    out.push('\n');
    out.push_str(&format!("{indent}{}\n", card.excerpt));

    if let Some(href) = &card.register_href {
        out.push_str(&format!(
            "{indent}{}\n",
            paint(Colour::Cyan.normal(), &format!("Register Now → {href}"), color)
        ));
    }
    out.push('\n');
}

fn paint(style: Style, s: &str, color: bool) -> String {
    if color {
        style.paint(s).to_string()
    } else {
        s.to_string()
    }
}

/// Pad on display width so wide glyphs keep columns aligned.
fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        format!("{s} ")
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}
