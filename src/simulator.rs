//! The simulation driver.
//!
//! One tick: every live animal acts exactly once, in field insertion order,
//! reading the current field and writing moves, kills' side effects, and
//! births into the next field, which then becomes current. All randomness
//! flows through one shared stream consumed in that same order, so a fixed
//! seed reproduces the whole run.

use serde::Serialize;

use crate::animal::Animal;
use crate::grid::{Field, Location};
use crate::rng::SimRng;
use crate::scenario::{Scenario, ScenarioError};
use crate::species::SpeciesCatalog;

/// Live population of one species at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesCount {
    pub name: String,
    pub alive: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickSummary {
    pub tick: u64,
    pub counts: Vec<SpeciesCount>,
}

pub struct Simulator {
    catalog: SpeciesCatalog,
    field: Field,
    rng: SimRng,
    tick: u64,
}

impl Simulator {
    /// Build a simulator with a freshly seeded starting population.
    pub fn new(catalog: SpeciesCatalog, width: u32, depth: u32, seed: u64) -> Self {
        let mut simulator = Self {
            catalog,
            field: Field::new(width, depth),
            rng: SimRng::new(seed),
            tick: 0,
        };
        simulator.populate();
        simulator
    }

    pub fn from_scenario(scenario: &Scenario, seed: u64) -> Result<Self, ScenarioError> {
        let catalog = scenario.build_catalog()?;
        Ok(Self::new(
            catalog,
            scenario.field.width,
            scenario.field.depth,
            seed,
        ))
    }

    /// Seed the field: cells in row-major order, species in catalog order,
    /// first passing creation-probability roll wins the cell. Seeded animals
    /// get random ages so the population is not one synchronized cohort.
    fn populate(&mut self) {
        for row in 0..self.field.depth() {
            for col in 0..self.field.width() {
                let location = Location::new(row, col);
                for id in self.catalog.ids() {
                    let def = self.catalog.def(id);
                    if self.rng.next_f64() <= def.creation_probability {
                        let animal =
                            Animal::spawn_with_random_age(id, def, location, &mut self.rng);
                        self.field.place_animal(animal, location);
                        break;
                    }
                }
            }
        }
    }

    /// Discard the field and reseed it from the same catalog and stream.
    pub fn reset(&mut self) {
        self.field = Field::new(self.field.width(), self.field.depth());
        self.tick = 0;
        self.populate();
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) -> TickSummary {
        self.tick += 1;
        let mut next = Field::new(self.field.width(), self.field.depth());
        for index in 0..self.field.animal_count() {
            if !self.field.animal(index).is_alive() {
                continue;
            }
            let mut animal = self.field.animal(index).clone();
            animal.act(&self.catalog, &mut self.field, &mut next, &mut self.rng);
        }
        self.field = next;
        self.summary()
    }

    /// Run `ticks` ticks, stopping early if the ecosystem stops being viable.
    /// Returns the summary of the last tick executed.
    pub fn run(&mut self, ticks: u64) -> TickSummary {
        let mut last = self.summary();
        for _ in 0..ticks {
            if !self.is_viable() {
                break;
            }
            last = self.step();
        }
        last
    }

    /// Viable while every species still has at least one live animal.
    pub fn is_viable(&self) -> bool {
        self.catalog.ids().all(|id| self.field.count_alive(id) > 0)
    }

    pub fn summary(&self) -> TickSummary {
        let counts = self
            .catalog
            .ids()
            .map(|id| SpeciesCount {
                name: self.catalog.name(id).to_string(),
                alive: self.field.count_alive(id),
            })
            .collect();
        TickSummary {
            tick: self.tick,
            counts,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }
}
