//! # HTTP API
//!
//! The transport layer: an axum router over the repository client, plus the
//! [`ApiError`] taxonomy that renders repository outcomes as status codes and
//! fixed JSON bodies.
//!
//! The handlers never see the collection itself; they hold a
//! [`RepositoryClient`](crate::repository::RepositoryClient) and every
//! mutation goes through the serializing actor task.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use axum::routing::get;
use axum::Router;

use crate::repository::RepositoryClient;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub repository: RepositoryClient,
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
