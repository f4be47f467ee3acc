//! Registration and login.
//!
//! Failures are caught here rather than propagated: store errors become a
//! 500 whose body is the raw error text. Login issues no token or session.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use wayfarer_accounts::{Credentials, EMAIL_FIELD, UserDraft};
use wayfarer_infra::RepositoryError;

use crate::app::dto;
use crate::app::errors::message_response;
use crate::app::services::AppServices;

pub const USER_EXISTS: &str = "User already exists";

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> Response {
    register_user(&services, UserDraft::from(body))
        .await
        .unwrap_or_else(internal_error)
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    login_user(&services, credentials)
        .await
        .unwrap_or_else(internal_error)
}

// The existence check and the insert are separate store calls; concurrent
// registrations with one email can both pass the check.
async fn register_user(services: &AppServices, draft: UserDraft) -> Result<Response, RepositoryError> {
    if let Some(email) = draft.email.as_deref()
        && services.users.find_by_field(EMAIL_FIELD, email).await?.is_some()
    {
        tracing::warn!("registration rejected: email already in use");
        return Ok(message_response(StatusCode::BAD_REQUEST, USER_EXISTS));
    }

    let user = services.users.create(&draft).await?;
    tracing::info!(user_id = %user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user.profile())).into_response())
}

async fn login_user(services: &AppServices, credentials: Credentials) -> Result<Response, RepositoryError> {
    let user = match credentials.email.as_deref() {
        Some(email) => services.users.find_by_field(EMAIL_FIELD, email).await?,
        None => None,
    };

    match credentials.verify(user.as_ref()) {
        Ok(profile) => Ok((StatusCode::OK, Json(profile)).into_response()),
        Err(err) => {
            tracing::warn!("login rejected");
            Ok(message_response(StatusCode::UNAUTHORIZED, err.to_string()))
        }
    }
}

fn internal_error(err: RepositoryError) -> Response {
    tracing::error!(error = %err, "user request failed");
    message_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
