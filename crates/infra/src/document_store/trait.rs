use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;
use uuid::Uuid;

use wayfarer_core::Collection;

/// Field under which every stored document carries its identifier.
pub const ID_FIELD: &str = "_id";

/// Document store operation error.
///
/// These are **infrastructure errors** as opposed to schema validation
/// failures, which never reach the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database failed (connection, query, lock poisoning...).
    #[error("{0}")]
    Backend(String),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{collection} documents must be JSON objects")]
    NotAnObject { collection: Collection },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Async access to named document collections.
///
/// Reads return documents in the store's natural order (insertion order for
/// the bundled implementations).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `body` under a fresh `_id` and return the stored document.
    async fn insert(&self, collection: Collection, body: JsonValue) -> StoreResult<JsonValue>;

    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<JsonValue>>;

    async fn find_by_id(&self, collection: Collection, id: Uuid) -> StoreResult<Option<JsonValue>>;

    /// First document whose top-level `field` equals `value`.
    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &JsonValue,
    ) -> StoreResult<Option<JsonValue>>;

    async fn count(&self, collection: Collection) -> StoreResult<u64>;
}

#[async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn insert(&self, collection: Collection, body: JsonValue) -> StoreResult<JsonValue> {
        (**self).insert(collection, body).await
    }

    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<JsonValue>> {
        (**self).find_all(collection).await
    }

    async fn find_by_id(&self, collection: Collection, id: Uuid) -> StoreResult<Option<JsonValue>> {
        (**self).find_by_id(collection, id).await
    }

    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &JsonValue,
    ) -> StoreResult<Option<JsonValue>> {
        (**self).find_one(collection, field, value).await
    }

    async fn count(&self, collection: Collection) -> StoreResult<u64> {
        (**self).count(collection).await
    }
}

/// Assign a new identifier to `body`, replacing any caller-supplied `_id`.
pub(crate) fn assign_id(collection: Collection, body: JsonValue) -> StoreResult<(Uuid, JsonValue)> {
    let JsonValue::Object(mut fields) = body else {
        return Err(StoreError::NotAnObject { collection });
    };
    let id = Uuid::now_v7();
    fields.insert(ID_FIELD.to_string(), JsonValue::String(id.to_string()));
    Ok((id, JsonValue::Object(fields)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assign_id_overrides_caller_id() {
        let (id, doc) = assign_id(Collection::Blogs, json!({ "_id": "mine", "title": "t" })).unwrap();
        assert_eq!(doc[ID_FIELD], json!(id.to_string()));
        assert_eq!(doc["title"], "t");
    }

    #[test]
    fn assign_id_rejects_non_objects() {
        let err = assign_id(Collection::Destinations, json!(["a"])).unwrap_err();
        assert_eq!(err.to_string(), "destinations documents must be JSON objects");
    }
}
