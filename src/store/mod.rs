use crate::event::EdmEvent;
use async_trait::async_trait;
use thiserror::Error;

pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// The document-store boundary the sync engine writes through. Implementors
/// persist events field-for-field; the serialized field names must survive
/// the round trip unchanged.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Removes every record in the event collection, returning how many were
    /// deleted.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Inserts every given event as a new record.
    async fn insert_many(&self, events: &[EdmEvent]) -> Result<(), StoreError>;
}
