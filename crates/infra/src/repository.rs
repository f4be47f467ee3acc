//! Typed access to one collection.
//!
//! A `Repository<T>` is the boundary between handlers and the document store:
//! drafts are validated before any write, stored JSON is decoded back into
//! `T`. No operation spans more than one store call, so sequences such as
//! "look up by email, then insert" are not atomic.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::debug;

use wayfarer_core::{Collection, Document, DocumentKey, DomainError, NewDocument};

use crate::document_store::{DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The draft failed schema validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A stored document no longer matches the schema.
    #[error("failed to decode {collection} document: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _document: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _document: PhantomData,
        }
    }
}

impl<T: Document> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _document: PhantomData,
        }
    }

    /// Validate `draft`, persist it, and return the stored document with its new ID.
    pub async fn create<D>(&self, draft: &D) -> RepositoryResult<T>
    where
        D: NewDocument<Document = T>,
    {
        draft.validate()?;

        let body = serde_json::to_value(draft).map_err(StoreError::from)?;
        let stored = self.store.insert(T::COLLECTION, body).await?;
        let document = decode::<T>(stored)?;

        debug!(collection = %T::COLLECTION, id = %document.id(), "document created");
        Ok(document)
    }

    /// Every document in the collection, in store order.
    pub async fn list(&self) -> RepositoryResult<Vec<T>> {
        self.store
            .find_all(T::COLLECTION)
            .await?
            .into_iter()
            .map(decode::<T>)
            .collect()
    }

    pub async fn get(&self, id: T::Id) -> RepositoryResult<Option<T>> {
        self.store
            .find_by_id(T::COLLECTION, *id.as_uuid())
            .await?
            .map(decode::<T>)
            .transpose()
    }

    /// First document whose top-level `field` equals `value`.
    pub async fn find_by_field(
        &self,
        field: &str,
        value: impl Into<JsonValue>,
    ) -> RepositoryResult<Option<T>> {
        self.store
            .find_one(T::COLLECTION, field, &value.into())
            .await?
            .map(decode::<T>)
            .transpose()
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.store.count(T::COLLECTION).await?)
    }
}

fn decode<T: Document>(value: JsonValue) -> RepositoryResult<T> {
    serde_json::from_value(value).map_err(|source| RepositoryError::Decode {
        collection: T::COLLECTION,
        source,
    })
}
