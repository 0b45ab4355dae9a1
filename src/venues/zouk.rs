use super::{dom, listing_event, Source, SourceLabel, SourceReport, SourceScrape};
use crate::config::model::SourceConfig;
use crate::event::EdmEvent;
use crate::filter::filter_unwanted;
use crate::http;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::{info, warn};

lazy_static! {
    static ref EVENT_ITEM: Selector = Selector::parse("div.eventitem").unwrap();
    static ref ARTIST_NAME: Selector = Selector::parse("span.uv-event-name").unwrap();
    static ref VENUE_NAME: Selector = Selector::parse("a.venueurl").unwrap();
    static ref TICKET_LINK: Selector = Selector::parse("a.uv-boxitem.noloader").unwrap();
}

/// The Zouk group calendar endpoint the venue's lazy loader calls: one HTML
/// page per calendar month. Months are walked forward from the current one
/// until a month comes back with no listings.
pub struct ZoukAdapter {
    config: SourceConfig,
}

impl ZoukAdapter {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Source for ZoukAdapter {
    fn label(&self) -> SourceLabel {
        SourceLabel::Zouk
    }

    async fn scrape(&self) -> SourceScrape {
        let mut report = SourceReport::default();
        let mut events = Vec::new();
        let mut cursor = MonthCursor::current();

        loop {
            let url = format!("{}{}", self.config.events_url, cursor.first_of_month());
            info!(%url, "visiting");

            let body = match http::fetch_text(&url).await {
                Ok(body) => body,
                Err(err) => {
                    warn!(%err, "zouk fetch failed, keeping events collected so far");
                    report.transport_failure = Some(err.to_string());
                    break;
                }
            };

            report.pages_fetched += 1;

            let page = collect_listings(&body, &mut report);
            if page.containers == 0 {
                break;
            }

            events.extend(page.events);
            cursor.advance();
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

struct PageListings {
    events: Vec<EdmEvent>,
    containers: usize,
}

fn collect_listings(body: &str, report: &mut SourceReport) -> PageListings {
    let document = Html::parse_document(body);
    let mut containers = 0;

    let events = document
        .select(&EVENT_ITEM)
        .filter_map(|element| {
            containers += 1;

            let artist_name = dom::select_text(element, &ARTIST_NAME);
            let club_name = dom::select_text(element, &VENUE_NAME);
            let ticket_url = dom::select_attr(element, &TICKET_LINK, "href").unwrap_or_default();

            listing_event(artist_name, club_name, ticket_url, report)
        })
        .collect();

    PageListings { events, containers }
}

/// Calendar-month pagination cursor, advanced one month per page with
/// December wrapping into January of the next year.
struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    fn current() -> Self {
        let today = Utc::now().date_naive();

        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    fn first_of_month(&self) -> String {
        format!("{}-{:02}-01", self.year, self.month)
    }

    fn advance(&mut self) {
        if self.month >= 12 {
            self.year += 1;
            self.month = 1;
        } else {
            self.month += 1;
        }
    }
}
