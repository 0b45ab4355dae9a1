use super::{dom, listing_event, Source, SourceLabel, SourceReport, SourceScrape};
use crate::config::model::SourceConfig;
use crate::event::EdmEvent;
use crate::filter::filter_unwanted;
use crate::http;
use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{info, warn};

lazy_static! {
    static ref EVENT_ITEM: Selector = Selector::parse("div.uv-carousel-lat").unwrap();
    static ref ARTIST_NAME: Selector = Selector::parse("h3.uv-event-name-title").unwrap();
    static ref VENUE_NAME: Selector = Selector::parse("div.uwsvenuename").unwrap();
    static ref TICKET_LINK: Selector = Selector::parse("a.hd-link").unwrap();
}

/// One page of the LIV lazy-load endpoint: the listings come back as an HTML
/// fragment inside a JSON envelope, together with the cursor for the next
/// page.
#[derive(Debug, Deserialize)]
pub struct AgendaPage {
    #[serde(default)]
    pub agenda: String,
    #[serde(default)]
    pub nevents: i64,
    #[serde(default)]
    pub nextloaddate: String,
}

/// The LIV events API: date-cursor pagination starting at today, each
/// response naming the date to load next. A page with no next date or no
/// events ends the walk; so does an envelope that fails to decode.
pub struct LivAdapter {
    config: SourceConfig,
}

impl LivAdapter {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Source for LivAdapter {
    fn label(&self) -> SourceLabel {
        SourceLabel::Liv
    }

    async fn scrape(&self) -> SourceScrape {
        let mut report = SourceReport::default();
        let mut events = Vec::new();
        let mut cursor = Utc::now().date_naive().format("%Y-%m-%d").to_string();

        loop {
            let url = format!("{}{}", self.config.events_url, cursor);
            info!(%url, "visiting");

            let body = match http::fetch_text(&url).await {
                Ok(body) => body,
                Err(err) => {
                    warn!(%err, "liv fetch failed, keeping events collected so far");
                    report.transport_failure = Some(err.to_string());
                    break;
                }
            };

            report.pages_fetched += 1;

            let page: AgendaPage = match serde_json::from_str(&body) {
                Ok(page) => page,
                Err(err) => {
                    warn!(%err, "liv envelope was not valid JSON, stopping pagination");
                    report.malformed_pages += 1;
                    break;
                }
            };

            // The final page's listings still count.
            events.extend(collect_listings(&page.agenda, &mut report));

            if page.nextloaddate.is_empty() || page.nevents < 1 {
                break;
            }
            cursor = page.nextloaddate;
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

fn collect_listings(fragment: &str, report: &mut SourceReport) -> Vec<EdmEvent> {
    let fragment = Html::parse_fragment(fragment);

    fragment
        .select(&EVENT_ITEM)
        .filter_map(|element| {
            let artist_name = dom::select_text(element, &ARTIST_NAME);
            let club_name = dom::select_text(element, &VENUE_NAME);
            let ticket_url = dom::select_attr(element, &TICKET_LINK, "href").unwrap_or_default();

            listing_event(artist_name, club_name, ticket_url, report)
        })
        .collect()
}
