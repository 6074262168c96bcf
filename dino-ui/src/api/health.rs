//! Health check endpoint
//!
//! Reports liveness plus the size of the loaded dino collection and how
//! many comparison runs it has absorbed.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Facts each dino carries straight after loading (seed + 3 derived)
const FACTS_AFTER_LOAD: usize = 4;

/// Facts each comparison run appends per dino
const FACTS_PER_RUN: usize = 3;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub dinos: usize,
    /// Submissions processed since startup, derived from the fact lists
    pub comparison_runs: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dinos = state.dinos.lock().await;
    let comparison_runs = dinos
        .first()
        .map(|d| d.facts.len().saturating_sub(FACTS_AFTER_LOAD) / FACTS_PER_RUN)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "dino-ui".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dinos: dinos.len(),
        comparison_runs,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
