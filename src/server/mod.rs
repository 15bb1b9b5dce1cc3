//! Axum application: routes, middleware and state.
//!
//! - `GET /api/data/{ticker}` - snapshot for one symbol (always 200)
//! - `GET /health` - liveness check

mod config;

pub use config::ServerConfig;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::Snapshot;
use crate::snapshot::Assembler;

/// Shared handler state. The assembler is cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub assembler: Assembler,
}

impl AppState {
    pub fn new(assembler: Assembler) -> Self {
        Self { assembler }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/data/{ticker}", get(get_snapshot))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /api/data/{ticker}`
///
/// Upstream failures degrade to empty arrays; the status is always 200.
async fn get_snapshot(State(state): State<AppState>, Path(ticker): Path<String>) -> Json<Snapshot> {
    Json(state.assembler.build_snapshot(&ticker).await)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// `GET /health`
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
