use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref TRAILING_DATE: Regex = Regex::new(r"(\d{8})\D*$").unwrap();
}

/// The date encodings observed across the venue feeds. A source declares the
/// kind it is known to emit; there is no auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYYMMDD`, as found at the tail of ticket URLs.
    CompactNumeric,
    /// `YYYY-MM-DD`.
    Hyphenated,
    /// `YYYY-M-D`.
    HyphenatedNoPad,
    /// `MM/DD/YYYY`, as emitted by the WordPress feeds.
    UsSlash,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::CompactNumeric => "%Y%m%d",
            DateFormat::Hyphenated => "%Y-%m-%d",
            DateFormat::HyphenatedNoPad => "%Y-%-m-%-d",
            DateFormat::UsSlash => "%m/%d/%Y",
        }
    }
}

#[derive(Debug, Error)]
#[error("could not parse {raw:?} as a {format:?} date: {source}")]
pub struct DateParseError {
    raw: String,
    format: DateFormat,
    #[source]
    source: chrono::ParseError,
}

/// Parses a venue date string into the canonical instant: midnight UTC of
/// the listed calendar day. The caller must drop the record on failure, not
/// substitute a default.
pub fn parse_event_date(raw: &str, format: DateFormat) -> Result<DateTime<Utc>, DateParseError> {
    let date = NaiveDate::parse_from_str(raw, format.pattern()).map_err(|source| DateParseError {
        raw: raw.to_string(),
        format,
        source,
    })?;

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Canonical wire form: `YYYY-MM-DDTHH:MM:SSZ`.
pub fn to_utc_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Whether the instant's calendar date is strictly before today. Events
/// scheduled later today are not past.
pub fn is_past(instant: &DateTime<Utc>) -> bool {
    is_past_on(instant, Utc::now().date_naive())
}

fn is_past_on(instant: &DateTime<Utc>, today: NaiveDate) -> bool {
    instant.date_naive() < today
}

/// The trailing 8-digit run of a ticket URL, which the HTML venues encode
/// the event date into.
pub fn trailing_date_digits(url: &str) -> Option<&str> {
    TRAILING_DATE
        .captures(url)
        .map(|captures| captures.get(1).unwrap().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn compact_numeric_round_trips_to_utc_midnight() {
        let instant = parse_event_date("19881130", DateFormat::CompactNumeric).unwrap();

        assert_eq!(to_utc_timestamp(&instant), "1988-11-30T00:00:00Z");
    }

    #[test]
    fn hyphenated_round_trips_to_utc_midnight() {
        let instant = parse_event_date("1988-11-30", DateFormat::Hyphenated).unwrap();

        assert_eq!(to_utc_timestamp(&instant), "1988-11-30T00:00:00Z");
    }

    #[test]
    fn hyphenated_without_padding_round_trips_to_utc_midnight() {
        let instant = parse_event_date("1988-1-3", DateFormat::HyphenatedNoPad).unwrap();

        assert_eq!(to_utc_timestamp(&instant), "1988-01-03T00:00:00Z");
    }

    #[test]
    fn us_slash_round_trips_to_utc_midnight() {
        let instant = parse_event_date("11/30/1988", DateFormat::UsSlash).unwrap();

        assert_eq!(to_utc_timestamp(&instant), "1988-11-30T00:00:00Z");
    }

    #[test]
    fn transposed_day_and_month_fail_to_parse() {
        // "30" lands in the month position once the year is consumed.
        assert!(parse_event_date("11301988", DateFormat::CompactNumeric).is_err());
    }

    #[test]
    fn missing_separator_fails_to_parse() {
        assert!(parse_event_date("1988-1130", DateFormat::Hyphenated).is_err());
    }

    #[test]
    fn out_of_range_day_fails_to_parse() {
        assert!(parse_event_date("99999999", DateFormat::CompactNumeric).is_err());
    }

    #[test]
    fn today_is_not_past_regardless_of_time_of_day() {
        let now = Utc::now();

        assert!(!is_past(&now));
        assert!(!is_past_on(&now, now.date_naive()));
    }

    #[test]
    fn yesterday_is_past() {
        let yesterday = Utc::now() - Days::new(1);

        assert!(is_past(&yesterday));
    }

    #[test]
    fn tomorrow_is_not_past() {
        let tomorrow = Utc::now() + Days::new(1);

        assert!(!is_past(&tomorrow));
    }

    #[test]
    fn extracts_the_trailing_date_digits_of_a_ticket_url() {
        assert_eq!(
            trailing_date_digits("https://zoukgrouplv.com/events/20260906"),
            Some("20260906")
        );
        assert_eq!(
            trailing_date_digits("https://wynnlasvegas.com/events/20260906/"),
            Some("20260906")
        );
    }

    #[test]
    fn urls_without_enough_digits_yield_nothing() {
        assert_eq!(
            trailing_date_digits("https://wynnlasvegas.com/events/invalid"),
            None
        );
        assert_eq!(trailing_date_digits("https://example.com/e/1234567"), None);
    }
}
