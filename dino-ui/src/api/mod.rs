//! HTTP API handlers for dino-ui

pub mod buildinfo;
pub mod compare;
pub mod dinos;
pub mod health;
pub mod ui;

pub use buildinfo::get_build_info;
pub use compare::{compare_page, compare_tiles};
pub use dinos::{get_dino, list_dinos};
pub use health::health_routes;
pub use ui::ui_routes;
