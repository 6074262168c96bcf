//! Read-only view of the dino collection, including accumulated facts

use axum::{
    extract::{Path, State},
    Json,
};
use dino_common::Dino;

use crate::{ApiError, ApiResult, AppState};

/// GET /api/dinos
pub async fn list_dinos(State(state): State<AppState>) -> Json<Vec<Dino>> {
    let dinos = state.dinos.lock().await;
    Json(dinos.clone())
}

/// GET /api/dinos/:species
///
/// Species match is case-insensitive.
pub async fn get_dino(
    State(state): State<AppState>,
    Path(species): Path<String>,
) -> ApiResult<Json<Dino>> {
    let dinos = state.dinos.lock().await;
    dinos
        .iter()
        .find(|d| d.species().eq_ignore_ascii_case(&species))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No dino with species '{}'", species)))
}
