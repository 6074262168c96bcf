//! Comparison trigger
//!
//! One submission runs the whole pipeline once: build the human from the
//! form, append comparison facts to every dino, render the tiles. The dino
//! lock is held for the whole run so concurrent submissions never
//! interleave. Facts are never reset, so each submission adds three more
//! facts per dino on top of the previous ones.

use std::collections::HashMap;

use axum::{
    extract::State,
    response::Html,
    Form, Json,
};
use dino_common::compare::compare_all;
use dino_common::render::{build_human_from_form, render_grid_html, render_tiles};
use dino_common::{Dino, Human, TileDescriptor};
use serde::Serialize;
use tracing::{debug, info};

use crate::api::ui::render_page;
use crate::AppState;

/// Response body for `POST /api/tiles`
#[derive(Debug, Serialize)]
pub struct TilesResponse {
    pub human: Human,
    pub tiles: Vec<TileDescriptor>,
}

/// POST /compare
///
/// Form submission: returns the page with the grid filled in and the form
/// hidden.
pub async fn compare_page(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Html<String> {
    let (_, tiles) = run_submission(&state, &form).await;
    Html(render_page(&render_grid_html(&tiles), true))
}

/// POST /api/tiles
///
/// Same pipeline as `/compare`, answering with the tile descriptors.
pub async fn compare_tiles(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<TilesResponse> {
    let (human, tiles) = run_submission(&state, &form).await;
    Json(TilesResponse { human, tiles })
}

async fn run_submission(
    state: &AppState,
    form: &HashMap<String, String>,
) -> (Human, Vec<TileDescriptor>) {
    let human = build_human_from_form(form);

    let mut dinos = state.dinos.lock().await;
    let tiles = run_pipeline(&mut dinos, &human);

    info!("Rendered {} tiles for {}", tiles.len(), human.name);
    (human, tiles)
}

/// Compare, then render. Synchronous so the whole run happens under one lock.
fn run_pipeline(dinos: &mut [Dino], human: &Human) -> Vec<TileDescriptor> {
    compare_all(dinos, human);
    for dino in dinos.iter() {
        debug!("{} now has {} facts", dino.species(), dino.facts.len());
    }
    render_tiles(dinos, human, &mut rand::thread_rng())
}
