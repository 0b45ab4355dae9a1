use crate::event::EdmEvent;
use crate::store::{EventStore, StoreError};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub deleted: u64,
    pub inserted: usize,
}

/// Replaces the store's contents with this run's scrape: one delete-all
/// followed by one insert-many, even for an empty scrape (which still clears
/// the store). The feeds expose no identity stable enough to upsert against;
/// each run is authoritative. The two phases are not atomic together; a
/// store failure aborts the run for the caller to handle.
pub async fn replace_all(
    events: &[EdmEvent],
    store: &dyn EventStore,
) -> Result<SyncReport, StoreError> {
    let deleted = store.delete_all().await?;
    info!(deleted, "cleared previous event collection");

    store.insert_many(events).await?;
    info!(inserted = events.len(), "stored freshly scraped events");

    Ok(SyncReport {
        deleted,
        inserted: events.len(),
    })
}
