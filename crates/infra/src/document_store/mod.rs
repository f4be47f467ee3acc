//! Document store boundary.
//!
//! Collections hold schemaless JSON objects keyed by a store-assigned `_id`.
//! The store is the only arbiter of write ordering; it offers no transactions
//! or compare-and-set.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use r#trait::{DocumentStore, ID_FIELD, StoreError, StoreResult};
