use std::sync::Arc;

use wayfarer_accounts::User;
use wayfarer_content::{Blog, Destination};
use wayfarer_infra::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore, Repository, StoreError};

use crate::config::StoreBackend;

/// Repositories shared by every request. Holds no per-request state.
#[derive(Clone)]
pub struct AppServices {
    pub blogs: Repository<Blog>,
    pub destinations: Repository<Destination>,
    pub users: Repository<User>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            blogs: Repository::new(store.clone()),
            destinations: Repository::new(store.clone()),
            users: Repository::new(store),
        }
    }

    /// Services over a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryDocumentStore::new()))
    }
}

pub async fn build_services(backend: &StoreBackend) -> Result<AppServices, StoreError> {
    match backend {
        StoreBackend::InMemory => Ok(AppServices::in_memory()),
        StoreBackend::Postgres { database_url } => {
            let store = PostgresDocumentStore::connect(database_url).await?;
            tracing::info!("connected to postgres document store");
            Ok(AppServices::new(Arc::new(store)))
        }
    }
}
