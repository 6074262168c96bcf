//! dino-ui library - dinosaur comparison infographic service
//!
//! Serves the input form, runs the comparison pipeline on submission and
//! returns the rendered tile grid.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use dino_common::Dino;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Dino collection, loaded once at startup and extended in place by
    /// every comparison run
    pub dinos: Arc<Mutex<Vec<Dino>>>,
    /// Directory served under `/images`
    pub images_dir: PathBuf,
}

impl AppState {
    pub fn new(dinos: Vec<Dino>, images_dir: PathBuf) -> Self {
        Self {
            dinos: Arc::new(Mutex::new(dinos)),
            images_dir,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let images = ServeDir::new(&state.images_dir);

    Router::new()
        // UI routes (HTML pages)
        .merge(api::ui_routes())
        .route("/compare", post(api::compare_page))
        // API routes
        .route("/api/tiles", post(api::compare_tiles))
        .route("/api/dinos", get(api::list_dinos))
        .route("/api/dinos/:species", get(api::get_dino))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .nest_service("/images", images)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
