//! Liveness, readiness and build info. Readiness goes through the product store, not a raw pool.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    store: &'static str,
    /// Round trip of the store ping, present only when it succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    store_latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

#[tracing::instrument(name = "readiness", skip_all)]
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let started = Instant::now();
    match state.store.ping().await {
        Ok(()) => {
            let elapsed = started.elapsed().as_millis() as u64;
            tracing::debug!(elapsed_ms = elapsed, "product store reachable");
            (
                StatusCode::OK,
                Json(ReadyBody {
                    status: "ok",
                    store: "ok",
                    store_latency_ms: Some(elapsed),
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "product store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    store: "unavailable",
                    store_latency_ms: None,
                }),
            )
        }
    }
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready (product store ping), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
