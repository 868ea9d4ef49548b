//! The field: a rectangular grid of cells holding at most one animal each.
//!
//! During a tick the driver reads one field (current) and writes another
//! (next), so every animal sees the same world snapshot regardless of
//! processing order. Neighbor enumeration is row-major over the 3x3
//! neighborhood with the center excluded; a fixed order here is what makes
//! runs reproducible under a fixed seed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::animal::Animal;
use crate::species::SpeciesId;

/// A cell position: `row` in `[0, depth)`, `col` in `[0, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: u32,
    pub col: u32,
}

impl Location {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

pub struct Field {
    width: u32,
    depth: u32,
    animals: Vec<Animal>,
    occupancy: HashMap<Location, usize>,
}

impl Field {
    pub fn new(width: u32, depth: u32) -> Self {
        Self {
            width,
            depth,
            animals: Vec::new(),
            occupancy: HashMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn in_bounds(&self, location: Location) -> bool {
        location.row < self.depth && location.col < self.width
    }

    /// Place an animal at `location`, updating the animal's own position.
    ///
    /// Callers are responsible for picking a free cell. If the cell is
    /// occupied the previous occupant is marked dead and displaced, matching
    /// the last-write-wins behavior of the occupancy map.
    pub fn place_animal(&mut self, mut animal: Animal, location: Location) {
        debug_assert!(self.in_bounds(location));
        animal.set_location(location);
        if let Some(&index) = self.occupancy.get(&location) {
            self.animals[index].set_dead();
        }
        let index = self.animals.len();
        self.animals.push(animal);
        self.occupancy.insert(location, index);
    }

    /// The occupant of `location`, dead or alive. Callers that care about
    /// liveness check it themselves; a killed animal stays queryable for the
    /// rest of the tick so mate searches can reject it.
    pub fn animal_at(&self, location: Location) -> Option<&Animal> {
        self.occupancy
            .get(&location)
            .map(|&index| &self.animals[index])
    }

    /// Mark the occupant of `location` dead, if there is one.
    pub fn mark_dead_at(&mut self, location: Location) {
        if let Some(&index) = self.occupancy.get(&location) {
            self.animals[index].set_dead();
        }
    }

    /// All in-bounds neighbors of `location`, row-major, center excluded.
    pub fn adjacent_locations(&self, location: Location) -> Vec<Location> {
        let mut adjacent = Vec::with_capacity(8);
        let row = location.row as i64;
        let col = location.col as i64;
        for dr in -1..=1_i64 {
            for dc in -1..=1_i64 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (r, c) = (row + dr, col + dc);
                if r >= 0 && c >= 0 && (r as u32) < self.depth && (c as u32) < self.width {
                    adjacent.push(Location::new(r as u32, c as u32));
                }
            }
        }
        adjacent
    }

    /// Neighbors of `location` with no live occupant, in enumeration order.
    pub fn free_adjacent_locations(&self, location: Location) -> Vec<Location> {
        self.adjacent_locations(location)
            .into_iter()
            .filter(|loc| self.animal_at(*loc).map_or(true, |a| !a.is_alive()))
            .collect()
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn animal(&self, index: usize) -> &Animal {
        &self.animals[index]
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn count_alive(&self, species: SpeciesId) -> u64 {
        self.animals
            .iter()
            .filter(|a| a.is_alive() && a.species() == species)
            .count() as u64
    }
}
