use super::{dom, listing_event, Source, SourceLabel, SourceReport, SourceScrape};
use crate::config::model::SourceConfig;
use crate::event::EdmEvent;
use crate::filter::filter_unwanted;
use crate::http;
use async_trait::async_trait;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::{info, warn};

lazy_static! {
    static ref EVENT_ITEM: Selector = Selector::parse("div.eventitem").unwrap();
    static ref ARTIST_NAME: Selector = Selector::parse("span.uv-events-name").unwrap();
    static ref VENUE_NAME: Selector = Selector::parse("span.venueurl").unwrap();
    static ref TICKET_LINK: Selector = Selector::parse("a.uv-btn").unwrap();
}

/// The Wynn events page: one static HTML document listing every upcoming
/// show, no pagination. Non-nightlife properties sharing the page (the field
/// club, festival takeovers) are deny-listed away after extraction.
pub struct WynnAdapter {
    config: SourceConfig,
}

impl WynnAdapter {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Source for WynnAdapter {
    fn label(&self) -> SourceLabel {
        SourceLabel::Wynn
    }

    async fn scrape(&self) -> SourceScrape {
        let mut report = SourceReport::default();
        let mut events = Vec::new();

        info!(url = %self.config.events_url, "visiting");

        match http::fetch_text(&self.config.events_url).await {
            Ok(body) => {
                report.pages_fetched = 1;
                events = collect_listings(&body, &mut report);
            }
            Err(err) => {
                warn!(%err, "wynn fetch failed");
                report.transport_failure = Some(err.to_string());
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

fn collect_listings(body: &str, report: &mut SourceReport) -> Vec<EdmEvent> {
    let document = Html::parse_document(body);

    document
        .select(&EVENT_ITEM)
        .filter_map(|element| {
            let artist_name = dom::select_text(element, &ARTIST_NAME);
            let club_name = dom::select_text(element, &VENUE_NAME);
            let ticket_url = dom::select_attr(element, &TICKET_LINK, "href").unwrap_or_default();

            listing_event(artist_name, club_name, ticket_url, report)
        })
        .collect()
}
