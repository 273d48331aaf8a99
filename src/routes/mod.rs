//! Router assembly.

mod common;
mod products;

pub use common::common_routes;
pub use products::product_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: common and product routes behind body-limit and request tracing layers.
/// `BODY_LIMIT_BYTES` replaces axum's built-in 2 MiB extractor limit, so oversized bodies get 413 either way.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(product_routes(state))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
