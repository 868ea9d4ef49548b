pub mod animal;
pub mod grid;
pub mod rng;
pub mod scenario;
pub mod simulator;
pub mod snapshot;
pub mod species;

pub use scenario::{Scenario, ScenarioLoader};
pub use simulator::{Simulator, TickSummary};
