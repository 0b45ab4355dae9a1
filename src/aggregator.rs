use crate::event::EdmEvent;
use crate::venues::{Source, SourceLabel, SourceReport};
use futures::future;
use itertools::Itertools;
use tracing::info;

/// Everything one run scraped: the flattened event list plus a per-source
/// summary of what was collected and dropped.
#[derive(Debug)]
pub struct Harvest {
    pub events: Vec<EdmEvent>,
    pub sources: Vec<SourceSummary>,
}

#[derive(Debug)]
pub struct SourceSummary {
    pub label: SourceLabel,
    pub collected: usize,
    pub report: SourceReport,
}

/// Drives every source to its terminal state and concatenates the results in
/// source order. Sources run concurrently and fail independently: one feed
/// going dark only shrinks the harvest, it never aborts the run.
pub async fn collect_all(sources: &[Box<dyn Source>]) -> Harvest {
    let scrapes = future::join_all(sources.iter().map(|source| source.scrape())).await;

    let mut events = Vec::new();
    let mut summaries = Vec::new();

    for scrape in scrapes {
        info!(
            source = scrape.label.as_str().to_lowercase(),
            collected = scrape.events.len(),
            dropped = scrape.report.dropped_total(),
            pages = scrape.report.pages_fetched,
            transport_failure = scrape.report.transport_failure.as_deref().unwrap_or("none"),
            "source finished"
        );

        summaries.push(SourceSummary {
            label: scrape.label,
            collected: scrape.events.len(),
            report: scrape.report,
        });
        events.extend(scrape.events);
    }

    let per_source = summaries
        .iter()
        .map(|summary| format!("{}={}", summary.label.as_str().to_lowercase(), summary.collected))
        .join(",");
    info!(total = events.len(), sources = %per_source, "aggregation complete");

    Harvest {
        events,
        sources: summaries,
    }
}
