//! Entity model: Animal, Dino and Human
//!
//! `Animal` is the shared shape. `Dino` and `Human` embed it rather than
//! extend it, and the capabilities that only need the shared fields
//! (`image_ref`) are free functions over `&Animal`.

use rand::Rng;
use serde::Serialize;

/// Species tag carried by every human record
pub const HUMAN_SPECIES: &str = "human";

/// Shared base shape for every entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animal {
    pub species: String,
    /// Weight in pounds
    pub weight: f64,
    /// Height in inches
    pub height: f64,
}

/// A dinosaur record with its narrative fact list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dino {
    #[serde(flatten)]
    pub animal: Animal,
    pub diet: String,
    #[serde(rename = "where")]
    pub location: String,
    pub when: String,
    /// Ordered, append-only
    pub facts: Vec<String>,
}

/// The user being compared; built once per submission, never mutated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Human {
    #[serde(flatten)]
    pub animal: Animal,
    pub name: String,
}

/// Access to the shared base shape of an entity
pub trait AsAnimal {
    fn animal(&self) -> &Animal;
}

impl AsAnimal for Animal {
    fn animal(&self) -> &Animal {
        self
    }
}

impl AsAnimal for Dino {
    fn animal(&self) -> &Animal {
        &self.animal
    }
}

impl AsAnimal for Human {
    fn animal(&self) -> &Animal {
        &self.animal
    }
}

/// Construct the base shape. No validation beyond the numeric types.
pub fn make_animal(species: impl Into<String>, weight: f64, height: f64) -> Animal {
    Animal {
        species: species.into(),
        weight,
        height,
    }
}

/// Image path for an entity, derived from its lower-cased species
///
/// # Examples
/// ```
/// use dino_common::model::{image_ref, make_animal};
///
/// let rex = make_animal("Tyrannosaurus Rex", 11905.0, 144.0);
/// assert_eq!(image_ref(&rex), "images/tyrannosaurus rex.png");
/// ```
pub fn image_ref(animal: &Animal) -> String {
    format!("images/{}.png", animal.species.to_lowercase())
}

impl Dino {
    /// Construct a dino whose fact list holds only the supplied fact.
    ///
    /// Call [`finalize_facts`] before the dino is compared or rendered.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        species: impl Into<String>,
        weight: f64,
        height: f64,
        diet: impl Into<String>,
        location: impl Into<String>,
        when: impl Into<String>,
        fact: impl Into<String>,
    ) -> Self {
        Self {
            animal: make_animal(species, weight, height),
            diet: diet.into(),
            location: location.into(),
            when: when.into(),
            facts: vec![fact.into()],
        }
    }

    pub fn species(&self) -> &str {
        &self.animal.species
    }
}

/// Append the three derived facts (species, era, location) in fixed order.
///
/// Must run exactly once per dino, right after construction.
pub fn finalize_facts(dino: &mut Dino) {
    let species = format!("Species is {}.", dino.animal.species);
    let when = format!("I was in {}.", dino.when);
    let location = format!("I am from {}.", dino.location);
    dino.facts.extend([species, when, location]);
}

/// Pick one fact using `floor(r * 10) % facts.len()` with `r` in `[0, 1)`.
///
/// The scale-by-ten is kept as is: for fact lists whose length does not
/// divide 10 the lower indices are favoured.
///
/// # Panics
/// Panics if `facts` is empty, which cannot happen for a dino built with
/// [`Dino::new`].
pub fn pick_fact<'a, R: Rng + ?Sized>(dino: &'a Dino, rng: &mut R) -> &'a str {
    let index = pick_index(dino.facts.len(), rng);
    &dino.facts[index]
}

fn pick_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    let scaled = (rng.gen::<f64>() * 10.0).floor() as usize;
    scaled % len
}

impl Human {
    pub fn new(name: impl Into<String>, weight: f64, height: f64) -> Self {
        Self {
            animal: make_animal(HUMAN_SPECIES, weight, height),
            name: name.into(),
        }
    }
}
