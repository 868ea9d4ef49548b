//! Life-cycle and reproduction properties of individual animals.

use foxfield::animal::{Animal, Gender};
use foxfield::grid::{Field, Location};
use foxfield::rng::SimRng;
use foxfield::species::{Diet, SpeciesCatalog, SpeciesDef, SpeciesId, SpeciesParams};

fn herbivore(
    breeding_age: u32,
    max_age: u32,
    breeding_probability: f64,
    max_litter_size: u32,
) -> (SpeciesCatalog, SpeciesId) {
    let mut catalog = SpeciesCatalog::new();
    let id = catalog.register(SpeciesDef {
        name: "rabbit".into(),
        params: SpeciesParams::new(breeding_age, max_age, breeding_probability, max_litter_size)
            .unwrap(),
        diet: Diet::Herbivore,
        creation_probability: 0.1,
    });
    (catalog, id)
}

/// A field holding one female mate adjacent to (1, 1).
fn field_with_mate(catalog: &SpeciesCatalog, id: SpeciesId) -> Field {
    let mut field = Field::new(4, 4);
    field.place_animal(
        Animal::with_gender(id, catalog.def(id), Gender::Female, Location::new(1, 2)),
        Location::new(1, 2),
    );
    field
}

#[test]
fn age_after_n_ticks_equals_n_and_death_is_exact() {
    let (catalog, id) = herbivore(5, 10, 0.5, 4);
    let mut animal = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));
    assert_eq!(animal.age(), 0);

    for n in 1..=10 {
        animal.increment_age();
        assert_eq!(animal.age(), n);
        assert!(animal.is_alive(), "alive through max_age");
    }
    animal.increment_age();
    assert_eq!(animal.age(), 11);
    assert!(!animal.is_alive(), "dead once age exceeds max_age");
}

#[test]
fn gender_never_changes_over_a_lifetime() {
    let (catalog, id) = herbivore(5, 40, 0.5, 4);
    let field = field_with_mate(&catalog, id);
    let mut rng = SimRng::new(3);
    let mut animal = Animal::young(id, catalog.def(id), Location::new(1, 1), &mut rng);
    let gender_at_birth = animal.gender();

    for _ in 0..20 {
        animal.increment_age();
        animal.breed(&field, &mut rng);
        assert_eq!(animal.gender(), gender_at_birth);
    }
}

#[test]
fn same_gender_neighbor_never_enables_breeding() {
    let (catalog, id) = herbivore(0, 40, 1.0, 4);
    let male = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));

    let mut field = Field::new(4, 4);
    field.place_animal(
        Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 2)),
        Location::new(1, 2),
    );

    let mut rng = SimRng::new(3);
    assert!(!male.can_breed(&field));
    assert_eq!(male.breed(&field, &mut rng), 0);
    assert_eq!(rng.draw_count(), 0);
}

#[test]
fn ineligible_breed_consumes_no_random_draws() {
    let (catalog, id) = herbivore(5, 40, 1.0, 4);
    let empty = Field::new(4, 4);
    let mut rng = SimRng::new(3);

    // No mate at all.
    let mut animal = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));
    for _ in 0..10 {
        animal.increment_age();
    }
    assert_eq!(animal.breed(&empty, &mut rng), 0);
    assert_eq!(rng.draw_count(), 0);

    // Under breeding age, mate present: still no draws, no search needed.
    let juvenile = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));
    let field = field_with_mate(&catalog, id);
    assert_eq!(juvenile.breed(&field, &mut rng), 0);
    assert_eq!(rng.draw_count(), 0);
}

#[test]
fn failed_probability_roll_consumes_exactly_one_draw() {
    let (catalog, id) = herbivore(0, 40, 0.0, 4);
    let field = field_with_mate(&catalog, id);
    let male = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));

    let mut rng = SimRng::new(3);
    assert_eq!(male.breed(&field, &mut rng), 0);
    assert_eq!(rng.draw_count(), 1, "the probability roll is consumed");
}

#[test]
fn successful_breeding_stays_within_litter_bounds() {
    let (catalog, id) = herbivore(0, 40, 1.0, 4);
    let field = field_with_mate(&catalog, id);
    let male = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));

    let mut rng = SimRng::new(3);
    for _ in 0..100 {
        let births = male.breed(&field, &mut rng);
        assert!((1..=4).contains(&births), "births {births} out of bounds");
    }
}

#[test]
fn births_are_capped_by_free_locations() {
    let (catalog, id) = herbivore(0, 40, 1.0, 4);
    let current = field_with_mate(&catalog, id);
    let parent = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));

    let mut next = Field::new(4, 4);
    let mut free = vec![Location::new(1, 0)];
    let mut rng = SimRng::new(3);
    parent.give_birth(&mut next, &mut free, &current, catalog.def(id), &mut rng);

    assert!(free.is_empty(), "the single free cell is consumed");
    assert_eq!(next.animal_count(), 1, "extra births are dropped");
    let young = next.animal_at(Location::new(1, 0)).unwrap();
    assert!(young.is_alive());
    assert_eq!(young.age(), 0);
    assert_eq!(young.species(), id);
}

#[test]
fn no_free_locations_means_no_placements() {
    let (catalog, id) = herbivore(0, 40, 1.0, 4);
    let current = field_with_mate(&catalog, id);
    let parent = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));

    let mut next = Field::new(4, 4);
    let mut free = Vec::new();
    let mut rng = SimRng::new(3);
    parent.give_birth(&mut next, &mut free, &current, catalog.def(id), &mut rng);
    assert_eq!(next.animal_count(), 0);
}

#[test]
fn dead_animals_stay_inert() {
    let (catalog, id) = herbivore(0, 1, 1.0, 4);
    let field = field_with_mate(&catalog, id);
    let mut animal = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));

    animal.increment_age();
    animal.increment_age();
    assert!(!animal.is_alive());
    assert_eq!(animal.location(), None);

    let mut rng = SimRng::new(3);
    animal.increment_age();
    assert_eq!(animal.age(), 2, "dead animals do not age");
    assert_eq!(animal.location(), None);
    assert!(!animal.can_breed(&field));
    assert_eq!(animal.breed(&field, &mut rng), 0);
    assert_eq!(rng.draw_count(), 0);
}

#[test]
fn breeding_age_gate_opens_exactly_at_threshold() {
    let (catalog, id) = herbivore(5, 10, 1.0, 4);
    let field = field_with_mate(&catalog, id);
    let mut animal = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));

    for _ in 0..4 {
        animal.increment_age();
        assert!(
            !animal.can_breed(&field),
            "age {} is under the breeding age",
            animal.age()
        );
    }
    animal.increment_age();
    assert_eq!(animal.age(), 5);
    assert!(animal.can_breed(&field), "mate present and age gate passed");
}

#[test]
fn give_birth_is_deterministic_for_a_fixed_seed() {
    let (catalog, id) = herbivore(0, 40, 1.0, 4);
    let current = field_with_mate(&catalog, id);
    let parent = Animal::with_gender(id, catalog.def(id), Gender::Male, Location::new(1, 1));
    let free_template = vec![
        Location::new(0, 0),
        Location::new(0, 1),
        Location::new(0, 2),
        Location::new(0, 3),
    ];

    let run = || {
        let mut next = Field::new(4, 4);
        let mut free = free_template.clone();
        let mut rng = SimRng::new(21);
        parent.give_birth(&mut next, &mut free, &current, catalog.def(id), &mut rng);
        let genders: Vec<Gender> = next.animals().iter().map(|a| a.gender()).collect();
        (next.animal_count(), free.len(), genders)
    };

    assert_eq!(run(), run());
}
