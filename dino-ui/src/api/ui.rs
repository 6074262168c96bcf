//! UI serving routes
//!
//! The page is rendered server-side: the form posts to `/compare`, which
//! answers with the same page carrying the tile grid and the form hidden.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use dino_common::render::html_escape;

use crate::api::buildinfo::BuildInfo;
use crate::AppState;

const APP_CSS: &str = include_str!("../../ui/app.css");

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_index))
        .route("/static/app.css", get(serve_app_css))
}

/// GET /
///
/// Form page with an empty grid
pub async fn serve_index() -> Html<String> {
    Html(render_page("", false))
}

/// GET /static/app.css
pub async fn serve_app_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        APP_CSS,
    )
        .into_response()
}

/// Full page around `grid_html`. Once the grid has been rendered the form
/// is hidden and stays hidden for that page.
pub fn render_page(grid_html: &str, form_hidden: bool) -> String {
    let build = BuildInfo::current();
    let form_style = if form_hidden {
        " style=\"display: none\""
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dinosaurs</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <header>
        <h1>Dinosaurs</h1>
        <h3>How do you compare?</h3>
    </header>
    <form id="dino-compare" action="/compare" method="post"{form_style}>
        <p>Name:</p>
        <input id="name" class="form-field__full" type="text" name="name">
        <p>Height</p>
        <label>Feet: <input id="feet" class="form-field__short" type="number" step="any" name="feet"></label>
        <label>inches: <input id="inches" class="form-field__short" type="number" step="any" name="inches"></label>
        <p>Weight:</p>
        <label><input id="weight" class="form-field__full" type="number" step="any" name="weight">lbs</label>
        <button id="btn" type="submit">Compare Me!</button>
    </form>
    <main id="grid">
{grid_html}    </main>
    <footer>dino-ui v{version} | {git_hash} ({profile}) | {timestamp}</footer>
</body>
</html>
"#,
        form_style = form_style,
        grid_html = grid_html,
        version = html_escape(&build.version),
        git_hash = html_escape(&build.git_hash),
        profile = html_escape(&build.build_profile),
        timestamp = html_escape(&build.build_timestamp),
    )
}
