//! Scenario configuration.
//!
//! A scenario YAML file fixes everything about a run: field dimensions, seed,
//! tick count, snapshot cadence, and the species table (breeding constants,
//! seeding densities, and predator prey links). Building the catalog is where
//! species parameters get validated, so a bad file fails before the first tick.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::species::{Diet, SpeciesCatalog, SpeciesDef, SpeciesError, SpeciesId, SpeciesParams};

fn default_snapshot_interval_ticks() -> u64 {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub ticks: Option<u64>,
    #[serde(default = "default_snapshot_interval_ticks")]
    pub snapshot_interval_ticks: u64,
    pub field: FieldConfig,
    pub species: Vec<SpeciesConfig>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FieldConfig {
    pub width: u32,
    pub depth: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesConfig {
    pub name: String,
    pub breeding_age: u32,
    pub max_age: u32,
    pub breeding_probability: f64,
    pub max_litter_size: u32,
    pub creation_probability: f64,
    /// Name of the species this one hunts. Absent for herbivores.
    #[serde(default)]
    pub prey: Option<String>,
    /// Ticks of food one prey animal is worth. Required alongside `prey`.
    #[serde(default)]
    pub food_value: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario must define at least one species")]
    NoSpecies,
    #[error("field dimensions must be non-zero")]
    EmptyField,
    #[error("species '{species}' preys on unknown species '{prey}'")]
    UnknownPrey { species: String, prey: String },
    #[error("species '{0}' declares prey without a positive food value")]
    MissingFoodValue(String),
    #[error("creation probability for '{0}' must be within [0, 1]")]
    CreationProbabilityOutOfRange(String),
    #[error(transparent)]
    Species(#[from] SpeciesError),
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    /// Validate and assemble the species catalog. Prey links are resolved by
    /// name against this scenario's own species list.
    pub fn build_catalog(&self) -> Result<SpeciesCatalog, ScenarioError> {
        if self.species.is_empty() {
            return Err(ScenarioError::NoSpecies);
        }
        if self.field.width == 0 || self.field.depth == 0 {
            return Err(ScenarioError::EmptyField);
        }

        // Ids are assigned in declaration order, so prey links can be
        // resolved by position before anything is registered.
        let mut catalog = SpeciesCatalog::new();
        for config in &self.species {
            if !(0.0..=1.0).contains(&config.creation_probability) {
                return Err(ScenarioError::CreationProbabilityOutOfRange(
                    config.name.clone(),
                ));
            }
            let params = SpeciesParams::new(
                config.breeding_age,
                config.max_age,
                config.breeding_probability,
                config.max_litter_size,
            )?;
            let diet = match &config.prey {
                None => Diet::Herbivore,
                Some(prey_name) => {
                    let prey = self
                        .species
                        .iter()
                        .position(|s| &s.name == prey_name)
                        .map(SpeciesId::from_index)
                        .ok_or_else(|| ScenarioError::UnknownPrey {
                            species: config.name.clone(),
                            prey: prey_name.clone(),
                        })?;
                    let food_value = match config.food_value {
                        Some(value) if value > 0 => value,
                        _ => return Err(ScenarioError::MissingFoodValue(config.name.clone())),
                    };
                    Diet::Predator { prey, food_value }
                }
            };
            catalog.register(SpeciesDef {
                name: config.name.clone(),
                params,
                diet,
                creation_probability: config.creation_probability,
            });
        }
        Ok(catalog)
    }

    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.or(self.ticks).unwrap_or(500)
    }
}
