use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One nightlife listing, normalized to the shape every venue feed converges
/// on before aggregation. Field names are part of the storage contract and
/// must round-trip through JSON unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdmEvent {
    pub id: String,
    pub artist_name: String,
    pub club_name: String,
    pub event_date: String,
    pub ticket_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_image_url: Option<String>,
}

impl EdmEvent {
    /// Builds an event with a freshly generated id. The id exists for
    /// downstream storage only and is never used to deduplicate.
    pub fn new(
        artist_name: String,
        club_name: String,
        event_date: String,
        ticket_url: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            artist_name,
            club_name,
            event_date,
            ticket_url,
            artist_image_url: None,
        }
    }
}
