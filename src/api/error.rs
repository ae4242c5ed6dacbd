//! Client-facing error taxonomy and its HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::repository::RepositoryError;

/// Everything the API can report to a caller.
///
/// The display strings are the wire contract: they are rendered verbatim as
/// the `error` field of the JSON body. `Internal` is the boundary catch-all;
/// whatever fault produced it is logged server-side and never leaks into the
/// response.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// Requested id matches no record (or the id segment was not numeric).
    #[error("Produto não encontrado")]
    NotFound,

    /// Create request is missing a required field.
    #[error("Campos obrigatórios: name, quantity, price")]
    MissingFields,

    /// Any fault that has no client-facing classification.
    #[error("Ocorreu um erro no servidor")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(_) => ApiError::NotFound,
            // Channel faults mean the actor is gone; a 404 would be a lie.
            other => {
                tracing::error!(error = %other, "repository failure");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
