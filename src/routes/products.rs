//! Product routes.

use crate::handlers::products::{create, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list).post(create))
        .route("/products/:id", get(read))
        .with_state(state)
}
