use crate::error::FarmError;
use std::str::FromStr;

/// Registry-assigned colony identifier, starting at 1
pub type ColonyId = u32;

/// A positioned colony with its three resource counters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colony {
    id: ColonyId,
    species: &'static str,
    pub x: i64,
    pub y: i64,
    pub food: i64,
    pub workers: i64,
    pub warriors: i64,
}

impl Colony {
    /// Create an empty colony at the given position
    pub fn new(id: ColonyId, x: i64, y: i64, species: &'static str) -> Self {
        Self {
            id,
            species,
            x,
            y,
            food: 0,
            workers: 0,
            warriors: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> ColonyId {
        self.id
    }

    #[inline]
    pub fn species(&self) -> &'static str {
        self.species
    }

    /// Add `amount` to one counter; negative amounts are allowed
    pub fn give(&mut self, resource: Resource, amount: i64) {
        let counter = match resource {
            Resource::Food => &mut self.food,
            Resource::Worker => &mut self.workers,
            Resource::Warrior => &mut self.warriors,
        };
        *counter = counter.saturating_add(amount);
    }

    /// Compare warrior counts; nothing is consumed
    pub fn fight(&self, other: &Colony) -> FightOutcome {
        match self.warriors.cmp(&other.warriors) {
            std::cmp::Ordering::Greater => FightOutcome::FirstWins,
            std::cmp::Ordering::Less => FightOutcome::SecondWins,
            std::cmp::Ordering::Equal => FightOutcome::Draw,
        }
    }
}

/// The three resource kinds a colony holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Food,
    Worker,
    Warrior,
}

impl FromStr for Resource {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| FarmError::UnknownResource(s.to_string()))
    }
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Food, Resource::Worker, Resource::Warrior];

    /// Name accepted by `give`
    pub const fn as_str(self) -> &'static str {
        match self {
            Resource::Food => "food",
            Resource::Worker => "worker",
            Resource::Warrior => "warrior",
        }
    }

    /// Label used when reporting a transfer ("50 food", "3 workers")
    pub const fn label(self) -> &'static str {
        match self {
            Resource::Food => "food",
            Resource::Worker => "workers",
            Resource::Warrior => "warriors",
        }
    }
}

/// Result of comparing two colonies' warriors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightOutcome {
    FirstWins,
    SecondWins,
    Draw,
}
