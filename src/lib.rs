//! # Ant Farm
//!
//! A line-driven toy simulation of ant colonies.
//!
//! Colonies are spawned at coordinates with a species picked by a roll,
//! given food, workers and warriors, listed, and pitted against each other
//! by comparing warrior counts. All state lives in an [`AntFarm`] owned by a
//! [`Session`] that reads one command per line.

pub mod cli;
pub mod colony;
pub mod command;
pub mod error;
pub mod farm;
pub mod report;

pub use cli::Args;
pub use colony::{Colony, ColonyId, FightOutcome, Resource};
pub use command::{Command, Flow, Session};
pub use error::{FarmError, Result};
pub use farm::{AntFarm, FightReport};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{AntFarm, Args, Colony, Command, FarmError, Result, Session};
}
