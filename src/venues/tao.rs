use super::{Source, SourceLabel, SourceReport, SourceScrape};
use crate::config::model::SourceConfig;
use crate::dates::{self, DateFormat};
use crate::event::EdmEvent;
use crate::filter::filter_unwanted;
use crate::http;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

const PAGE_SIZE: u32 = 500;

lazy_static! {
    static ref VEGAS_SUFFIX: Regex = Regex::new(r"\s-\slas vegas").unwrap();
}

// Only the consumed slice of the WordPress event payload. All fields are
// defaulted; a gutted record degrades on its own, not the whole page.
#[derive(Debug, Default, Deserialize)]
pub struct TaoEvent {
    #[serde(default)]
    pub acf: TaoAcf,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaoAcf {
    #[serde(default)]
    pub event_title: TaoTitle,
    #[serde(default)]
    pub event_venue: Vec<TaoVenue>,
    #[serde(default)]
    pub event_start_date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaoTitle {
    #[serde(default)]
    pub display_title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaoVenue {
    #[serde(default)]
    pub post_title: String,
}

/// The Tao Group WordPress REST feed: a JSON array of event records per
/// page, paged by number until the API answers non-2xx for a page past the
/// end. The same feed carries the group's restaurants, hence the deny list.
pub struct TaoGroupAdapter {
    config: SourceConfig,
}

impl TaoGroupAdapter {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Source for TaoGroupAdapter {
    fn label(&self) -> SourceLabel {
        SourceLabel::TaoGroup
    }

    async fn scrape(&self) -> SourceScrape {
        let mut report = SourceReport::default();
        let mut events = Vec::new();
        let mut page_number = 1;

        loop {
            let url = format!(
                "{}&page={}&per_page={}",
                self.config.events_url, page_number, PAGE_SIZE
            );
            info!(%url, "visiting");

            let body = match http::fetch_text(&url).await {
                Ok(body) => body,
                Err(err) if err.is_status() => {
                    debug!(%err, "reached the end of the paginated feed");
                    break;
                }
                Err(err) => {
                    warn!(%err, "tao group fetch failed, keeping events collected so far");
                    report.transport_failure = Some(err.to_string());
                    break;
                }
            };

            report.pages_fetched += 1;
            page_number += 1;

            let records: Vec<TaoEvent> = match serde_json::from_str(&body) {
                Ok(records) => records,
                Err(err) => {
                    warn!(%err, "tao group page was not valid JSON, stopping pagination");
                    report.malformed_pages += 1;
                    break;
                }
            };

            for record in records {
                if let Some(event) = normalize_record(record, &mut report) {
                    events.push(event);
                }
            }
        }

        let extracted = events.len();
        let events = filter_unwanted(events, &self.config.deny_list);
        report.deny_listed = extracted - events.len();

        SourceScrape {
            label: self.label(),
            events,
            report,
        }
    }
}

fn normalize_record(record: TaoEvent, report: &mut SourceReport) -> Option<EdmEvent> {
    // A record without a venue cannot be classified as a club.
    let Some(venue) = record.acf.event_venue.first() else {
        report.missing_venue += 1;
        return None;
    };

    let club_name = strip_vegas_suffix(&venue.post_title);
    let raw_date = record
        .acf
        .event_start_date
        .split_whitespace()
        .next()
        .unwrap_or_default();

    let instant = match dates::parse_event_date(raw_date, DateFormat::UsSlash) {
        Ok(instant) => instant,
        Err(err) => {
            debug!(link = %record.link, %err, "dropping record with unparsable date");
            report.invalid_dates += 1;
            return None;
        }
    };

    if dates::is_past(&instant) {
        report.past_events += 1;
        return None;
    }

    Some(EdmEvent::new(
        record.acf.event_title.display_title.to_lowercase(),
        club_name,
        dates::to_utc_timestamp(&instant),
        record.link,
    ))
}

fn strip_vegas_suffix(venue_title: &str) -> String {
    let venue_title = venue_title.to_lowercase();

    VEGAS_SUFFIX.replace_all(&venue_title, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_las_vegas_qualifier_and_lowercases() {
        assert_eq!(strip_vegas_suffix("Hakkasan - Las Vegas"), "hakkasan");
        assert_eq!(
            strip_vegas_suffix("TAO Nightclub - Las Vegas"),
            "tao nightclub"
        );
    }

    #[test]
    fn leaves_titles_without_the_qualifier_alone() {
        assert_eq!(
            strip_vegas_suffix("Lavo Italian Restaurant"),
            "lavo italian restaurant"
        );
    }

    #[test]
    fn deserializes_the_consumed_slice_of_a_record() {
        let records = serde_json::from_str::<Vec<TaoEvent>>(
            r#"[{
                "id": 1,
                "link": "https://taogroup.com/event/tiesto",
                "acf": {
                    "event_title": {"badge": "", "display_title": "Tiësto"},
                    "event_start_date": "09/05/2026 10:00 PM",
                    "event_venue": [{"post_title": "Hakkasan - Las Vegas", "post_status": "publish"}]
                },
                "yoast_head": "<meta>"
            }]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].acf.event_title.display_title, "Tiësto");
        assert_eq!(records[0].acf.event_venue[0].post_title, "Hakkasan - Las Vegas");
        assert_eq!(records[0].acf.event_start_date, "09/05/2026 10:00 PM");
        assert_eq!(records[0].link, "https://taogroup.com/event/tiesto");
    }

    #[test]
    fn deserializes_a_record_with_an_empty_venue_list() {
        let records = serde_json::from_str::<Vec<TaoEvent>>(
            r#"[{
                "link": "https://taogroup.com/event/test",
                "acf": {
                    "event_title": {"display_title": "Test"},
                    "event_start_date": "09/05/2026 10:00 PM",
                    "event_venue": []
                }
            }]"#,
        )
        .unwrap();

        assert!(records[0].acf.event_venue.is_empty());
    }
}
