//! Species definitions.
//!
//! A species is data, not a type: each animal carries a `SpeciesId` into the
//! catalog plus an immutable copy of its breeding parameters. Offspring
//! construction dispatches on the id, so there is no per-species inheritance
//! and no instance can override another species' constants.

use serde::Serialize;
use thiserror::Error;

/// Index into the [`SpeciesCatalog`]. Species equality is id equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpeciesId(usize);

impl SpeciesId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

/// What a species eats, and what eating it is worth to a predator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diet {
    Herbivore,
    Predator { prey: SpeciesId, food_value: u32 },
}

/// Fixed breeding constants for one species, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesParams {
    breeding_age: u32,
    max_age: u32,
    breeding_probability: f64,
    max_litter_size: u32,
}

#[derive(Debug, Error)]
pub enum SpeciesError {
    #[error("max litter size must be at least 1, got {0}")]
    LitterTooSmall(u32),
    #[error("breeding probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
    #[error("max age must be at least 1")]
    ZeroMaxAge,
}

impl SpeciesParams {
    pub fn new(
        breeding_age: u32,
        max_age: u32,
        breeding_probability: f64,
        max_litter_size: u32,
    ) -> Result<Self, SpeciesError> {
        if max_litter_size < 1 {
            return Err(SpeciesError::LitterTooSmall(max_litter_size));
        }
        if !(0.0..=1.0).contains(&breeding_probability) {
            return Err(SpeciesError::ProbabilityOutOfRange(breeding_probability));
        }
        if max_age < 1 {
            return Err(SpeciesError::ZeroMaxAge);
        }
        Ok(Self {
            breeding_age,
            max_age,
            breeding_probability,
            max_litter_size,
        })
    }

    pub fn breeding_age(&self) -> u32 {
        self.breeding_age
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn breeding_probability(&self) -> f64 {
        self.breeding_probability
    }

    pub fn max_litter_size(&self) -> u32 {
        self.max_litter_size
    }
}

/// One species entry: name, breeding constants, diet, seeding density.
#[derive(Debug, Clone)]
pub struct SpeciesDef {
    pub name: String,
    pub params: SpeciesParams,
    pub diet: Diet,
    pub creation_probability: f64,
}

/// The full species table for a run. Order is scenario order and fixes both
/// seeding precedence and the reporting order of population counts.
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    defs: Vec<SpeciesDef>,
}

impl SpeciesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: SpeciesDef) -> SpeciesId {
        let id = SpeciesId(self.defs.len());
        self.defs.push(def);
        id
    }

    pub fn def(&self, id: SpeciesId) -> &SpeciesDef {
        &self.defs[id.0]
    }

    pub fn name(&self, id: SpeciesId) -> &str {
        &self.defs[id.0].name
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SpeciesId> {
        (0..self.defs.len()).map(SpeciesId)
    }
}
