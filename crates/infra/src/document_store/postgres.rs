//! Postgres-backed document store.
//!
//! All collections share one `documents` table with a JSONB `body`. The
//! `seq` column gives the natural (insertion) order; `(collection, id)` is
//! unique.
//!
//! ## Error Mapping
//!
//! Every `sqlx::Error` becomes `StoreError::Backend` carrying the driver's
//! message unchanged.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::{PgPool, Row, postgres::PgRow, types::Json};
use tracing::instrument;
use uuid::Uuid;

use wayfarer_core::Collection;

use super::r#trait::{DocumentStore, StoreError, StoreResult, assign_id};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    seq         BIGSERIAL PRIMARY KEY,
    collection  TEXT NOT NULL,
    id          UUID NOT NULL,
    body        JSONB NOT NULL,
    inserted_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (collection, id)
)
"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_seq ON documents (collection, seq)";

/// Postgres-backed document store.
///
/// Uses the SQLx connection pool, which is `Send + Sync`; the store can be
/// shared across request tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and make sure the `documents` table exists.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(database_url).await.map_err(backend)?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the table and index if missing. Idempotent.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await.map_err(backend)?;
        sqlx::query(CREATE_INDEX).execute(&self.pool).await.map_err(backend)?;
        Ok(())
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn body_of(row: &PgRow) -> StoreResult<JsonValue> {
    let Json(body) = row.try_get::<Json<JsonValue>, _>("body").map_err(backend)?;
    Ok(body)
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[instrument(skip(self, body), fields(collection = %collection))]
    async fn insert(&self, collection: Collection, body: JsonValue) -> StoreResult<JsonValue> {
        let (id, doc) = assign_id(collection, body)?;

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(id)
            .bind(Json(&doc))
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        Ok(doc)
    }

    #[instrument(skip(self), fields(collection = %collection))]
    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<JsonValue>> {
        let rows = sqlx::query("SELECT body FROM documents WHERE collection = $1 ORDER BY seq")
            .bind(collection.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        rows.iter().map(body_of).collect()
    }

    #[instrument(skip(self), fields(collection = %collection))]
    async fn find_by_id(&self, collection: Collection, id: Uuid) -> StoreResult<Option<JsonValue>> {
        let row = sqlx::query("SELECT body FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        row.as_ref().map(body_of).transpose()
    }

    #[instrument(skip(self, value), fields(collection = %collection))]
    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &JsonValue,
    ) -> StoreResult<Option<JsonValue>> {
        let row = sqlx::query(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body -> $2 = $3
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(collection.as_str())
        .bind(field)
        .bind(Json(value))
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.as_ref().map(body_of).transpose()
    }

    #[instrument(skip(self), fields(collection = %collection))]
    async fn count(&self, collection: Collection) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
