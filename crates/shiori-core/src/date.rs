//! Lenient date parsing and display formatting.
//!
//! Article dates arrive as free-form strings. Anything that looks like a
//! common calendar date or timestamp is accepted; everything else is kept as
//! an opaque string and shown verbatim.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y年%m月%d日",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Year-month forms, completed to the first of the month.
const YEAR_MONTH_FORMATS: &[(&str, &str)] = &[("-", "%Y-%m-%d"), ("/", "%Y/%m/%d")];

enum Parsed {
    /// Carries an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

fn parse(raw: &str) -> Option<Parsed> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Parsed::Zoned(dt));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(Parsed::Zoned(dt));
    }

    if let Some(dt) = ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(Parsed::Zoned(dt));
    }

    if let Some(utc) = s.strip_suffix(['Z', 'z']) {
        if let Some(dt) = parse_naive_datetime(utc) {
            return Some(Parsed::Zoned(dt.and_utc().fixed_offset()));
        }
    }

    parse_naive_datetime(s)
        .or_else(|| parse_naive_date(s).map(|d| d.and_time(NaiveTime::MIN)))
        .map(Parsed::Naive)
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn parse_naive_date(s: &str) -> Option<NaiveDate> {
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }

    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    YEAR_MONTH_FORMATS.iter().find_map(|(sep, fmt)| {
        NaiveDate::parse_from_str(&format!("{s}{sep}01"), fmt).ok()
    })
}

/// Parse a date string in any of the commonly used layouts.
///
/// Offset-carrying timestamps keep the wall-clock time of their own offset,
/// which is what gets displayed. Use [`parse_instant`] to order dates.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    parse(raw).map(|parsed| match parsed {
        Parsed::Zoned(dt) => dt.naive_local(),
        Parsed::Naive(dt) => dt,
    })
}

/// Parse a date string into the instant it denotes.
///
/// Offset-carrying timestamps are converted to UTC; dates and times without
/// an offset are read as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    parse(raw).map(|parsed| match parsed {
        Parsed::Zoned(dt) => dt.with_timezone(&Utc),
        Parsed::Naive(dt) => dt.and_utc(),
    })
}

/// Format an article date for display.
///
/// Parsed dates render as `YYYY-MM-DD`; anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}

/// Build the publish-date stamp label, e.g. `発行日: 2024-03-09`.
pub fn publish_date_label(prefix: &str, today: NaiveDate) -> String {
    format!("{prefix}{}", today.format("%Y-%m-%d"))
}
