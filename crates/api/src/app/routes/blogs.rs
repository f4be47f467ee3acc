use std::sync::Arc;

use axum::{Json, Router, extract::Extension, http::StatusCode, routing::get};

use wayfarer_content::{Blog, BlogView};
use wayfarer_infra::joins;

use crate::app::dto;
use crate::app::errors::UnhandledError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_blogs).post(create_blog))
}

/// Every blog, with `author` resolved to `{ "name": ... }` or `null`.
pub async fn list_blogs(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<BlogView>>, UnhandledError> {
    let blogs = joins::blogs_with_authors(&services.blogs, &services.users).await?;
    Ok(Json(blogs))
}

pub async fn create_blog(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateBlogRequest>,
) -> Result<(StatusCode, Json<Blog>), UnhandledError> {
    let draft = body.into_draft()?;
    let blog = services.blogs.create(&draft).await?;

    tracing::info!(blog_id = %blog.id, "blog created");
    Ok((StatusCode::CREATED, Json(blog)))
}
