//! Dino data file loading
//!
//! The data file is read once at startup. Every record is constructed and
//! finalized before it is handed out, so callers never see a dino with only
//! its seed fact.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::model::{finalize_facts, Dino};
use crate::{Error, Result};

/// Top-level shape of the data file
#[derive(Debug, Deserialize)]
pub struct DinoFile {
    #[serde(rename = "Dinos")]
    pub dinos: Vec<DinoRecord>,
}

/// One dinosaur record as stored in the data file
#[derive(Debug, Clone, Deserialize)]
pub struct DinoRecord {
    pub species: String,
    pub weight: f64,
    pub height: f64,
    pub diet: String,
    #[serde(rename = "where")]
    pub location: String,
    pub when: String,
    pub fact: String,
}

impl DinoRecord {
    /// Construct and finalize the dino for this record
    pub fn into_dino(self) -> Dino {
        let mut dino = Dino::new(
            self.species,
            self.weight,
            self.height,
            self.diet,
            self.location,
            self.when,
            self.fact,
        );
        finalize_facts(&mut dino);
        dino
    }

    fn validate(&self) -> Result<()> {
        let sane = |v: f64| v.is_finite() && v >= 0.0;
        if !sane(self.weight) || !sane(self.height) {
            return Err(Error::InvalidInput(format!(
                "{}: weight and height must be non-negative (got weight={}, height={})",
                self.species, self.weight, self.height
            )));
        }
        Ok(())
    }
}

/// Parse data file contents into finalized dinos, preserving file order.
pub fn parse_dinos(json: &str) -> Result<Vec<Dino>> {
    let file: DinoFile = serde_json::from_str(json)?;

    file.dinos
        .into_iter()
        .map(|record| {
            record.validate()?;
            debug!("Loaded dino record: {}", record.species);
            Ok(record.into_dino())
        })
        .collect()
}

/// Read and parse the data file. Any failure is fatal to startup.
pub async fn load_dinos(path: &Path) -> Result<Vec<Dino>> {
    let json = tokio::fs::read_to_string(path).await?;
    let dinos = parse_dinos(&json)?;
    info!("Loaded {} dinos from {}", dinos.len(), path.display());
    Ok(dinos)
}
