//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: document store selection and typed repositories
//! - `routes/`: HTTP routes + handlers (one file per collection)
//! - `dto.rs`: request DTOs and their mapping to drafts
//! - `errors.rs`: the two error-response policies

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use wayfarer_infra::StoreError;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: &ApiConfig) -> Result<Router, StoreError> {
    let services = services::build_services(&config.store).await?;
    Ok(build_router(services))
}

/// Route table over already-built services. The table is fixed once built.
pub fn build_router(services: services::AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}
