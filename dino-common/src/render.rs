//! Render pipeline
//!
//! Turns the form input into a `Human`, and the (comparison-augmented) dino
//! collection plus that human into an ordered list of tile descriptors.
//! Descriptors are render-agnostic; `render_grid_html` materializes them.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{image_ref, pick_fact, AsAnimal, Dino, Human};

/// Species whose tile always shows [`BIRD_FACT`]
pub const PIGEON_SPECIES: &str = "Pigeon";
pub const BIRD_FACT: &str = "All birds are Dinosaurs";

/// The human tile is inserted right after the dino at this index
pub const HUMAN_TILE_AFTER: usize = 3;

/// One grid cell before HTML materialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub title: String,
    pub image_ref: String,
    pub fact: Option<String>,
}

/// Key-value source for the four form fields
pub trait FormSource {
    /// Raw field value; `None` when the field is absent
    fn field(&self, name: &str) -> Option<&str>;
}

impl FormSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Height in inches: `feet * 12 + inches`. No bounds checking.
pub fn height_from_feet_inches(feet: f64, inches: f64) -> f64 {
    feet * 12.0 + inches
}

/// Permissive float parse: the longest numeric prefix after leading
/// whitespace, or NaN when there is none. Never fails.
///
/// # Examples
/// ```
/// use dino_common::render::parse_float;
///
/// assert_eq!(parse_float(" 5.5ft"), 5.5);
/// assert_eq!(parse_float("-2e2"), -200.0);
/// assert!(parse_float("tall").is_nan());
/// ```
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Build the human from the `name`, `feet`, `inches` and `weight` fields.
///
/// Unparsable numeric fields produce NaN; no error is raised.
pub fn build_human_from_form<F: FormSource + ?Sized>(form: &F) -> Human {
    let name = form.field("name").unwrap_or_default();
    let feet = parse_float(form.field("feet").unwrap_or_default());
    let inches = parse_float(form.field("inches").unwrap_or_default());
    let weight = parse_float(form.field("weight").unwrap_or_default());

    Human::new(name, weight, height_from_feet_inches(feet, inches))
}

/// Build the tile list: one tile per dino in collection order, with the
/// human tile inserted after the fourth dino (none when there are fewer).
pub fn render_tiles<R: Rng + ?Sized>(
    dinos: &[Dino],
    human: &Human,
    rng: &mut R,
) -> Vec<TileDescriptor> {
    let mut tiles = Vec::with_capacity(dinos.len() + 1);

    for (i, dino) in dinos.iter().enumerate() {
        let mut fact = pick_fact(dino, rng);
        if dino.species() == PIGEON_SPECIES {
            fact = BIRD_FACT;
        }

        tiles.push(TileDescriptor {
            title: dino.species().to_string(),
            image_ref: image_ref(dino.animal()),
            fact: Some(fact.to_string()),
        });

        if i == HUMAN_TILE_AFTER {
            tiles.push(human_tile(human));
        }
    }

    tiles
}

fn human_tile(human: &Human) -> TileDescriptor {
    TileDescriptor {
        title: human.name.clone(),
        image_ref: image_ref(human.animal()),
        fact: None,
    }
}

/// Materialize tiles as grid items: `h3` title, `img`, and a `p` fact only
/// when the fact is present and non-empty.
pub fn render_grid_html(tiles: &[TileDescriptor]) -> String {
    let mut html = String::new();
    for tile in tiles {
        html.push_str("<div class=\"grid-item\">");
        html.push_str(&format!("<h3>{}</h3>", html_escape(&tile.title)));
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            html_escape(&tile.image_ref),
            html_escape(&tile.title)
        ));
        if let Some(fact) = tile.fact.as_deref().filter(|f| !f.is_empty()) {
            html.push_str(&format!("<p>{}</p>", html_escape(fact)));
        }
        html.push_str("</div>\n");
    }
    html
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
