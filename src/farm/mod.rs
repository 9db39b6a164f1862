pub mod registry;
pub mod species;

pub use registry::{AntFarm, FightReport};
pub use species::{species_code, species_name};
