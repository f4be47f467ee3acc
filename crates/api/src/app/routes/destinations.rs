use std::sync::Arc;

use axum::{Json, Router, extract::Extension, http::StatusCode, routing::get};

use wayfarer_content::{Destination, DestinationDraft};

use crate::app::dto;
use crate::app::errors::UnhandledError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_destinations).post(create_destination))
}

pub async fn list_destinations(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Destination>>, UnhandledError> {
    Ok(Json(services.destinations.list().await?))
}

/// A missing `name` fails validation and surfaces as the default 500.
pub async fn create_destination(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateDestinationRequest>,
) -> Result<(StatusCode, Json<Destination>), UnhandledError> {
    let draft = DestinationDraft::from(body);
    let destination = services.destinations.create(&draft).await?;

    tracing::info!(destination_id = %destination.id, "destination created");
    Ok((StatusCode::CREATED, Json(destination)))
}
