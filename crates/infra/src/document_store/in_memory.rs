use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use wayfarer_core::Collection;

use super::r#trait::{DocumentStore, ID_FIELD, StoreError, StoreResult, assign_id};

/// In-memory document store.
///
/// Intended for tests/dev. Each collection is a `Vec` kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<JsonValue>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(
        &self,
        collection: Collection,
        f: impl FnOnce(&[JsonValue]) -> T,
    ) -> StoreResult<T> {
        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(f(map.get(&collection).map(Vec::as_slice).unwrap_or_default()))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: Collection, body: JsonValue) -> StoreResult<JsonValue> {
        let (_id, doc) = assign_id(collection, body)?;

        let mut map = self
            .collections
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        map.entry(collection).or_default().push(doc.clone());

        Ok(doc)
    }

    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<JsonValue>> {
        self.read(collection, |docs| docs.to_vec())
    }

    async fn find_by_id(&self, collection: Collection, id: Uuid) -> StoreResult<Option<JsonValue>> {
        let id = JsonValue::String(id.to_string());
        self.find_one(collection, ID_FIELD, &id).await
    }

    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &JsonValue,
    ) -> StoreResult<Option<JsonValue>> {
        self.read(collection, |docs| {
            docs.iter().find(|doc| doc.get(field) == Some(value)).cloned()
        })
    }

    async fn count(&self, collection: Collection) -> StoreResult<u64> {
        self.read(collection, |docs| docs.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_assigns_id_and_lists_in_insertion_order() {
        let store = InMemoryDocumentStore::new();
        let first = store.insert(Collection::Destinations, json!({ "name": "Oslo" })).await.unwrap();
        let second = store.insert(Collection::Destinations, json!({ "name": "Rome" })).await.unwrap();
        assert_ne!(first[ID_FIELD], second[ID_FIELD]);

        let all = store.find_all(Collection::Destinations).await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = InMemoryDocumentStore::new();
        store.insert(Collection::Blogs, json!({ "title": "x" })).await.unwrap();

        assert_eq!(store.count(Collection::Blogs).await.unwrap(), 1);
        assert_eq!(store.count(Collection::Users).await.unwrap(), 0);
        assert!(store.find_all(Collection::Itineraries).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_one_matches_top_level_field() {
        let store = InMemoryDocumentStore::new();
        store.insert(Collection::Users, json!({ "email": "a@x.io", "name": "A" })).await.unwrap();
        let b = store.insert(Collection::Users, json!({ "email": "b@x.io", "name": "B" })).await.unwrap();

        let found = store
            .find_one(Collection::Users, "email", &json!("b@x.io"))
            .await
            .unwrap();
        assert_eq!(found, Some(b));

        let missing = store
            .find_one(Collection::Users, "email", &json!("c@x.io"))
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn find_by_id_resolves_stored_id() {
        let store = InMemoryDocumentStore::new();
        let doc = store.insert(Collection::Users, json!({ "name": "A" })).await.unwrap();
        let id: Uuid = doc[ID_FIELD].as_str().unwrap().parse().unwrap();

        assert_eq!(store.find_by_id(Collection::Users, id).await.unwrap(), Some(doc));
        assert_eq!(store.find_by_id(Collection::Users, Uuid::now_v7()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejected_insert_leaves_collection_untouched() {
        let store = InMemoryDocumentStore::new();
        assert!(store.insert(Collection::Blogs, json!("just a string")).await.is_err());
        assert_eq!(store.count(Collection::Blogs).await.unwrap(), 0);
    }

    proptest! {
        #[test]
        fn find_all_preserves_insertion_order(names in proptest::collection::vec("[a-z]{1,12}", 0..20)) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let listed = rt.block_on(async {
                let store = InMemoryDocumentStore::new();
                for name in &names {
                    store.insert(Collection::Destinations, json!({ "name": name })).await.unwrap();
                }
                store.find_all(Collection::Destinations).await.unwrap()
            });

            let listed_names: Vec<_> = listed.iter().map(|d| d["name"].as_str().unwrap().to_string()).collect();
            prop_assert_eq!(listed_names, names);
        }
    }
}
