//! Product handlers: list and read answer with envelopes, create answers with the bare row.

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use crate::response::{ApiData, ApiDatum, SelfLink};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// Accepts an optional `-` followed by ASCII digits only, so `+5`, ` 5` and `5.0` are rejected.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    let invalid = || AppError::BadRequest(format!("invalid id '{}': expected an integer", id_str));
    let digits = id_str.strip_prefix('-').unwrap_or(id_str);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    id_str.parse().map_err(|_| invalid())
}

/// GET /products
pub async fn list(
    State(state): State<AppState>,
    self_link: SelfLink,
) -> Result<ApiData<Product>, AppError> {
    let rows = state.store.find_many().await?;
    Ok(ApiData::new(self_link, rows))
}

/// GET /products/:id. A missing row is still 200, with `datum: null`.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    self_link: SelfLink,
) -> Result<ApiDatum<Product>, AppError> {
    let id = parse_id(&id_str)?;
    let row = state.store.find_unique(id).await?;
    if row.is_none() {
        tracing::debug!(id, "product not found");
    }
    Ok(ApiDatum::new(self_link, row))
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(input) = body?;
    let row = state.store.create(&input).await?;
    tracing::info!(id = row.id, "product created");
    Ok((StatusCode::CREATED, Json(row)))
}
