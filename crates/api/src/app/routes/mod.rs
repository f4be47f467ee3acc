use axum::Router;

pub mod blogs;
pub mod destinations;
pub mod system;
pub mod users;

/// Router for the collection endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/blogs", blogs::router())
        .nest("/destinations", destinations::router())
        .nest("/users", users::router())
}
