//! Animal life-cycle and reproduction.
//!
//! This is the heart of the simulation: aging and death, gender, the mate
//! search over adjacent cells, stochastic litter sizes, and capacity-limited
//! birth placement. Species differences are data (`SpeciesParams` plus a
//! `Diet`), so one `Animal` type covers every species and offspring are built
//! by the shared constructor dispatching on the parent's species id.
//!
//! Dead animals are inert: every life-cycle operation on a dead animal is a
//! no-op returning the dead default (no aging, no mate, zero births) and
//! consumes no random draws. Nothing ever resurrects an animal.

use crate::grid::{Field, Location};
use crate::rng::SimRng;
use crate::species::{Diet, SpeciesCatalog, SpeciesDef, SpeciesId, SpeciesParams};

/// Assigned once at construction, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone)]
pub struct Animal {
    species: SpeciesId,
    params: SpeciesParams,
    gender: Gender,
    alive: bool,
    location: Option<Location>,
    age: u32,
    /// Ticks until starvation; unused (zero) for herbivores.
    food_level: u32,
}

impl Animal {
    /// A newborn: age zero, gender drawn from the shared stream, predators
    /// start with a full stomach.
    pub fn young(
        species: SpeciesId,
        def: &SpeciesDef,
        location: Location,
        rng: &mut SimRng,
    ) -> Self {
        let gender = if rng.coin() {
            Gender::Male
        } else {
            Gender::Female
        };
        Self::with_gender(species, def, gender, location)
    }

    /// A newborn with an explicit gender. No random draws.
    pub fn with_gender(
        species: SpeciesId,
        def: &SpeciesDef,
        gender: Gender,
        location: Location,
    ) -> Self {
        let food_level = match def.diet {
            Diet::Herbivore => 0,
            Diet::Predator { food_value, .. } => food_value,
        };
        Self {
            species,
            params: def.params,
            gender,
            alive: true,
            location: Some(location),
            age: 0,
            food_level,
        }
    }

    /// Initial-seeding variant: random age (and, for predators, a random
    /// food level), so the starting population is not one synchronized cohort.
    pub fn spawn_with_random_age(
        species: SpeciesId,
        def: &SpeciesDef,
        location: Location,
        rng: &mut SimRng,
    ) -> Self {
        let mut animal = Self::young(species, def, location, rng);
        animal.age = rng.below(def.params.max_age());
        if let Diet::Predator { food_value, .. } = def.diet {
            animal.food_level = rng.below(food_value);
        }
        animal
    }

    pub fn species(&self) -> SpeciesId {
        self.species
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn food_level(&self) -> u32 {
        self.food_level
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    pub(crate) fn set_dead(&mut self) {
        self.alive = false;
        self.location = None;
    }

    /// Age by one tick; past `max_age` the animal dies. The driver calls this
    /// at most once per tick per live animal.
    pub fn increment_age(&mut self) {
        if !self.alive {
            return;
        }
        self.age += 1;
        if self.age > self.params.max_age() {
            self.set_dead();
        }
    }

    /// Whether a mate is available: of breeding age, with a live,
    /// opposite-gender animal of the same species in an adjacent cell of the
    /// current field. Performs no search before the age gate passes.
    pub fn can_breed(&self, current: &Field) -> bool {
        if !self.alive || self.age < self.params.breeding_age() {
            return false;
        }
        let Some(location) = self.location else {
            return false;
        };
        current
            .adjacent_locations(location)
            .into_iter()
            .any(|loc| {
                current.animal_at(loc).map_or(false, |other| {
                    other.species == self.species
                        && other.gender != self.gender
                        && other.is_alive()
                })
            })
    }

    /// Litter size for this tick: zero without a mate (and without touching
    /// the random stream), zero on a failed probability roll (one draw), else
    /// uniform in `[1, max_litter_size]` (two draws).
    pub fn breed(&self, current: &Field, rng: &mut SimRng) -> u32 {
        if !self.can_breed(current) {
            return 0;
        }
        if rng.next_f64() > self.params.breeding_probability() {
            return 0;
        }
        rng.below(self.params.max_litter_size()) + 1
    }

    /// Produce this tick's litter into the next field, consuming
    /// `free_locations` front to back. Births beyond the available free cells
    /// are dropped; that is the capacity policy, not an error. The free list
    /// is exclusively this call's to mutate.
    pub fn give_birth(
        &self,
        next: &mut Field,
        free_locations: &mut Vec<Location>,
        current: &Field,
        def: &SpeciesDef,
        rng: &mut SimRng,
    ) {
        let births = self.breed(current, rng);
        for _ in 0..births {
            if free_locations.is_empty() {
                break;
            }
            let location = free_locations.remove(0);
            let young = Animal::young(self.species, def, location, rng);
            next.place_animal(young, location);
        }
    }

    /// One tick of behavior: age, then graze or hunt depending on diet.
    /// Reads the current field, writes moves and births into the next field.
    pub fn act(
        &mut self,
        catalog: &SpeciesCatalog,
        current: &mut Field,
        next: &mut Field,
        rng: &mut SimRng,
    ) {
        self.increment_age();
        let def = catalog.def(self.species);
        match def.diet {
            Diet::Herbivore => self.graze(def, current, next, rng),
            Diet::Predator { prey, food_value } => {
                self.hunt(def, prey, food_value, current, next, rng)
            }
        }
    }

    fn graze(&mut self, def: &SpeciesDef, current: &Field, next: &mut Field, rng: &mut SimRng) {
        if !self.alive {
            return;
        }
        let Some(location) = self.location else {
            return;
        };
        let mut free = next.free_adjacent_locations(location);
        self.give_birth(next, &mut free, current, def, rng);
        if free.is_empty() {
            // Nowhere left to move: overcrowding.
            self.set_dead();
        } else {
            let destination = free.remove(0);
            next.place_animal(self.clone(), destination);
        }
    }

    fn hunt(
        &mut self,
        def: &SpeciesDef,
        prey: SpeciesId,
        food_value: u32,
        current: &mut Field,
        next: &mut Field,
        rng: &mut SimRng,
    ) {
        if self.alive {
            self.food_level = self.food_level.saturating_sub(1);
            if self.food_level == 0 {
                self.set_dead();
            }
        }
        if !self.alive {
            return;
        }
        let Some(location) = self.location else {
            return;
        };
        let mut free = next.free_adjacent_locations(location);
        self.give_birth(next, &mut free, current, def, rng);

        let mut destination = self.find_food(prey, food_value, current, location);
        if let Some(loc) = destination {
            // The kill site may already be taken in the next field.
            if next.animal_at(loc).map_or(false, |a| a.is_alive()) {
                destination = None;
            } else {
                free.retain(|l| *l != loc);
            }
        }
        let destination = destination.or_else(|| {
            if free.is_empty() {
                None
            } else {
                Some(free.remove(0))
            }
        });
        match destination {
            Some(loc) => next.place_animal(self.clone(), loc),
            None => self.set_dead(),
        }
    }

    /// Scan adjacent cells of the current field for live prey; eat the first
    /// found. The victim is marked dead in the current field so it neither
    /// acts nor qualifies as a mate later this tick.
    fn find_food(
        &mut self,
        prey: SpeciesId,
        food_value: u32,
        current: &mut Field,
        location: Location,
    ) -> Option<Location> {
        for loc in current.adjacent_locations(location) {
            let edible = current
                .animal_at(loc)
                .map_or(false, |a| a.species() == prey && a.is_alive());
            if edible {
                current.mark_dead_at(loc);
                self.food_level = food_value;
                return Some(loc);
            }
        }
        None
    }
}
