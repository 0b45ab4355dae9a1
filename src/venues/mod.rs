use crate::dates::{self, DateFormat};
use crate::event::EdmEvent;
use async_trait::async_trait;
use tracing::debug;

pub mod dom;
pub mod liv;
pub mod tao;
pub mod wynn;
pub mod zouk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
pub enum SourceLabel {
    Zouk,
    Wynn,
    TaoGroup,
    Liv,
}

impl SourceLabel {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// One venue feed's fetch+parse+normalize cycle. Adapters degrade instead of
/// erroring: whatever was collected before a failure is still returned, with
/// the failure noted on the report.
#[async_trait]
pub trait Source: Send + Sync {
    fn label(&self) -> SourceLabel;

    async fn scrape(&self) -> SourceScrape;
}

#[derive(Debug)]
pub struct SourceScrape {
    pub label: SourceLabel,
    pub events: Vec<EdmEvent>,
    pub report: SourceReport,
}

/// Per-run tally of what a source dropped, and why.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub pages_fetched: usize,
    pub invalid_dates: usize,
    pub past_events: usize,
    pub deny_listed: usize,
    pub missing_venue: usize,
    pub malformed_pages: usize,
    pub transport_failure: Option<String>,
}

impl SourceReport {
    pub fn dropped_total(&self) -> usize {
        self.invalid_dates + self.past_events + self.deny_listed + self.missing_venue
    }
}

/// Normalizes one HTML listing into an event: the date is the trailing 8
/// digits of the ticket URL, and listings that fail to parse or lie in the
/// past are dropped and counted.
pub(crate) fn listing_event(
    artist_name: String,
    club_name: String,
    ticket_url: String,
    report: &mut SourceReport,
) -> Option<EdmEvent> {
    let Some(raw_date) = dates::trailing_date_digits(&ticket_url) else {
        debug!(ticket_url = %ticket_url, "listing has no date digits, dropping");
        report.invalid_dates += 1;
        return None;
    };

    let instant = match dates::parse_event_date(raw_date, DateFormat::CompactNumeric) {
        Ok(instant) => instant,
        Err(err) => {
            debug!(ticket_url = %ticket_url, %err, "dropping listing with unparsable date");
            report.invalid_dates += 1;
            return None;
        }
    };

    if dates::is_past(&instant) {
        report.past_events += 1;
        return None;
    }

    Some(EdmEvent::new(
        artist_name.to_lowercase(),
        club_name.to_lowercase(),
        dates::to_utc_timestamp(&instant),
        ticket_url,
    ))
}
