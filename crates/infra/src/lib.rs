//! Infrastructure layer: document store adapters and typed repositories.

pub mod document_store;
pub mod joins;
pub mod repository;

#[cfg(test)]
mod integration_tests;

pub use document_store::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore, StoreError};
pub use repository::{Repository, RepositoryError, RepositoryResult};
