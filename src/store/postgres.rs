use super::{EventStore, StoreError};
use crate::event::EdmEvent;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS edm_events (id TEXT PRIMARY KEY, doc JSONB NOT NULL)";

/// Postgres-backed event collection. Each event is persisted as one JSONB
/// document; wire field names round-trip unchanged.
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect(database_url)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        info!("connected to the event store");

        Ok(Self { pool })
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM edm_events")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_many(&self, events: &[EdmEvent]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        for event in events {
            sqlx::query("INSERT INTO edm_events (id, doc) VALUES ($1, $2)")
                .bind(&event.id)
                .bind(Json(event))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
