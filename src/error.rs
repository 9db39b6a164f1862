use crate::colony::ColonyId;
use std::fmt;

/// Errors produced while parsing or executing farm commands
#[derive(Debug)]
pub enum FarmError {
    /// IO operation failed
    IoError(std::io::Error),
    /// No colony with this id
    NotFound(ColonyId),
    /// At least one side of a fight does not exist
    PairNotFound(ColonyId, ColonyId),
    /// Resource kind outside food/worker/warrior
    UnknownResource(String),
    /// Every colony id has been handed out
    IdsExhausted,
    /// Roll mapped to a code missing from the species table
    InvalidSpecies(i64),
    /// Leading verb not recognised
    UnknownCommand(String),
    /// Missing or malformed arguments for a known verb
    InvalidArguments {
        verb: &'static str,
        usage: &'static str,
    },
}

impl fmt::Display for FarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FarmError::IoError(err) => write!(f, "IO error: {}", err),
            FarmError::NotFound(id) => write!(f, "Colony with ID {} not found!", id),
            FarmError::PairNotFound(..) => write!(f, "One or both colonies not found!"),
            FarmError::UnknownResource(_) => write!(f, "Unknown resource type!"),
            FarmError::IdsExhausted => write!(f, "No colony ids left!"),
            FarmError::InvalidSpecies(_) => write!(f, "Invalid species number!"),
            FarmError::UnknownCommand(_) => write!(f, "Unknown command!"),
            FarmError::InvalidArguments { verb, usage } => {
                write!(f, "Invalid arguments for '{}'. Usage: {}", verb, usage)
            }
        }
    }
}

impl std::error::Error for FarmError {}

impl From<std::io::Error> for FarmError {
    fn from(err: std::io::Error) -> Self {
        FarmError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, FarmError>;
