//! # Dino Compare Common Library
//!
//! Shared code for the dinosaur comparison infographic:
//! - Entity model (Animal, Dino, Human)
//! - Data file loading
//! - Comparison engine (human-relative facts)
//! - Render pipeline (tile descriptors and grid HTML)
//! - Configuration loading

pub mod compare;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{AsAnimal, Animal, Dino, Human};
pub use render::TileDescriptor;
