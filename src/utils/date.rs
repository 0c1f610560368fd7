use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc,
};

/// ISO date-times without an offset. Read in the server's local zone.
const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Human-written date-times without an offset. Local zone.
const LOCAL_DATETIME_FORMATS: [&str; 6] = [
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Human-written dates. Local midnight.
const LOCAL_DATE_FORMATS: [&str; 6] = [
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%a %B %d %Y",
    "%m/%d/%Y",
];

/// `Date.prototype.toString()` output once the zone name is stripped,
/// e.g. `Fri May 01 2099 18:00:00 GMT+0900`.
const GMT_OFFSET_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// How a date string was written, before it is pinned to an instant.
enum Written {
    Offset(DateTime<FixedOffset>),
    UtcDate(NaiveDate),
    LocalDateTime(NaiveDateTime),
}

impl Written {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::Offset(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Some(Self::Offset(dt));
        }
        let without_zone_name = match s.rfind(" (") {
            Some(i) if s.ends_with(')') => &s[..i],
            _ => s,
        };
        if let Ok(dt) = DateTime::parse_from_str(without_zone_name, GMT_OFFSET_FORMAT) {
            return Some(Self::Offset(dt));
        }

        // ISO date-only strings are UTC midnight; every other offset-less
        // form is local time.
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self::UtcDate(d));
        }

        for fmt in ISO_DATETIME_FORMATS.iter().chain(LOCAL_DATETIME_FORMATS.iter()) {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self::LocalDateTime(naive));
            }
        }

        LOCAL_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::LocalDateTime)
    }

    fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Offset(dt) => Some(dt.with_timezone(&Utc)),
            Self::UtcDate(d) => d.and_hms_opt(0, 0, 0).map(|n| n.and_utc()),
            // `earliest` picks the first reading of an ambiguous wall time
            // and yields None inside a DST gap.
            Self::LocalDateTime(naive) => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    fn calendar_date(&self) -> NaiveDate {
        match self {
            Self::Offset(dt) => dt.date_naive(),
            Self::UtcDate(d) => *d,
            Self::LocalDateTime(naive) => naive.date(),
        }
    }
}

/// Parse an event's free-text date into an instant.
///
/// Accepted shapes:
/// - RFC 3339 (`2024-05-01T18:00:00+09:00`) and RFC 2822
/// - `Date.toString()` style (`Fri May 01 2099 18:00:00 GMT+0900 (JST)`)
/// - ISO date-time without offset, read as local time (`2024-05-01T18:00`)
/// - ISO plain date, read as UTC midnight (`2024-05-01`)
/// - `2024/05/01`, `May 1, 2024`, `1 May 2024`, `05/01/2024` (optionally
///   followed by `HH:MM[:SS]`), read as local time
pub fn parse_event_date(s: &str) -> Option<DateTime<Utc>> {
    Written::parse(s)?.instant()
}

/// The calendar day as written, with no zone conversion. Used for display
/// so that "May 1, 2099" reads as May 1st whatever the server's zone.
pub fn event_calendar_date(s: &str) -> Option<NaiveDate> {
    let written = Written::parse(s)?;
    written.instant()?;
    Some(written.calendar_date())
}

/// Reference instant given on the command line: RFC 3339 or a plain date.
pub fn parse_reference_now(s: &str) -> Result<DateTime<Utc>, String> {
    parse_event_date(s).ok_or_else(|| format!("Invalid reference date: {}", s))
}

/// Long date form, e.g. "January 1st, 2020".
pub fn format_long_date(dt: &NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        dt.format("%B"),
        dt.day(),
        ordinal_suffix(dt.day()),
        dt.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn plain_date_is_utc_midnight() {
        let dt = parse_event_date("2024-03-05").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn rfc3339_offset_is_normalized() {
        let dt = parse_event_date("2024-03-05T09:00:00+09:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn datetime_without_offset_is_local_time() {
        assert_eq!(parse_event_date("2024-05-01T18:00"), Some(local(2024, 5, 1, 18, 0)));
        assert_eq!(
            parse_event_date("2024-03-05 18:30:00"),
            Some(local(2024, 3, 5, 18, 30))
        );
    }

    #[test]
    fn written_out_dates_are_local_midnight() {
        let expected = Some(local(2099, 5, 1, 0, 0));
        assert_eq!(parse_event_date("May 1, 2099"), expected);
        assert_eq!(parse_event_date("May 1 2099"), expected);
        assert_eq!(parse_event_date("1 May 2099"), expected);
        assert_eq!(parse_event_date("2099/05/01"), expected);
        assert_eq!(parse_event_date("05/01/2099"), expected);
        assert_eq!(parse_event_date("Fri May 01 2099"), expected);
        assert_eq!(parse_event_date("2099/05/01 18:00"), Some(local(2099, 5, 1, 18, 0)));
    }

    #[test]
    fn date_to_string_form_keeps_its_offset() {
        let expected = Utc.with_ymd_and_hms(2099, 5, 1, 9, 0, 0).unwrap();
        assert_eq!(parse_event_date("Fri May 01 2099 18:00:00 GMT+0900"), Some(expected));
        assert_eq!(
            parse_event_date("Fri May 01 2099 18:00:00 GMT+0900 (Japan Standard Time)"),
            Some(expected)
        );
        assert_eq!(parse_event_date("Fri, 01 May 2099 18:00:00 +0900"), Some(expected));
    }

    #[test]
    fn calendar_date_ignores_the_zone() {
        let may_first = NaiveDate::from_ymd_opt(2099, 5, 1);
        assert_eq!(event_calendar_date("May 1, 2099"), may_first);
        assert_eq!(event_calendar_date("2099-05-01T23:30:00-10:00"), may_first);
        assert_eq!(event_calendar_date("2099-05-01"), may_first);
        assert_eq!(event_calendar_date("TBA"), None);
    }

    #[test]
    fn garbage_does_not_parse() {
        assert_eq!(parse_event_date("next tuesday"), None);
        assert_eq!(parse_event_date(""), None);
        assert_eq!(parse_event_date("   "), None);
        assert_eq!(parse_event_date("2024-13-40"), None);
    }

    #[test]
    fn long_date_uses_ordinals() {
        let fmt = |d: u32| format_long_date(&NaiveDate::from_ymd_opt(2020, 1, d).unwrap());
        assert_eq!(fmt(1), "January 1st, 2020");
        assert_eq!(fmt(2), "January 2nd, 2020");
        assert_eq!(fmt(3), "January 3rd, 2020");
        assert_eq!(fmt(11), "January 11th, 2020");
        assert_eq!(fmt(12), "January 12th, 2020");
        assert_eq!(fmt(22), "January 22nd, 2020");
        assert_eq!(fmt(31), "January 31st, 2020");
    }
}
