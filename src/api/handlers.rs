//! HTTP resource handlers.
//!
//! Each handler translates a parsed request into a repository call and maps
//! the outcome to a status code and JSON body. Create is the only operation
//! with request-shape validation; update accepts any subset of the patchable
//! fields, including the empty object.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::model::{Product, ProductCreate, ProductPatch};

/// Raw create body, before shape validation.
///
/// All fields are optional at the deserialization layer so that a missing or
/// null field becomes a 400 with the contract message instead of a rejection
/// from the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct CreateProductBody {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

impl CreateProductBody {
    /// Validates presence: `name` must be non-empty, `quantity` and `price`
    /// present and non-null. Zero is a valid value for both numerics.
    fn into_params(self) -> Result<ProductCreate, ApiError> {
        let name = self.name.filter(|n| !n.is_empty());
        match (name, self.quantity, self.price) {
            (Some(name), Some(quantity), Some(price)) => Ok(ProductCreate {
                name,
                quantity,
                price,
            }),
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// The `{id}` segment is taken raw; anything that does not parse as a `u64`
/// behaves as "no such record", not as a malformed request.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// Boundary catch-all for body extraction: an unparsable request body is an
/// unclassified fault and surfaces as the generic 500, with the detail kept
/// server-side.
fn accept_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(inner)| inner).map_err(|e| {
        tracing::warn!(error = %e, "rejected request body");
        ApiError::Internal
    })
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.repository.list().await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    match state.repository.get(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound),
    }
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<CreateProductBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let params = accept_body(body)?.into_params()?;
    let product = state.repository.create(params).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    patch: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let patch = accept_body(patch)?;
    let product = state.repository.update(id, patch).await?;
    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.repository.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "API rodando com sucesso!" }))
}
