use crate::colony::{Colony, ColonyId, FightOutcome, Resource};
use crate::error::{FarmError, Result};
use crate::farm::species::{species_code, species_name};
use log::debug;
use std::collections::BTreeMap;

/// Owner of every colony, keyed by monotonically assigned ids
#[derive(Clone, Debug)]
pub struct AntFarm {
    colonies: BTreeMap<ColonyId, Colony>,
    next_id: ColonyId,
}

/// Snapshot of both sides of a fight and how it ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FightReport {
    pub first: Colony,
    pub second: Colony,
    pub outcome: FightOutcome,
}

impl AntFarm {
    /// Create an empty farm; the first colony gets id 1
    pub fn new() -> Self {
        Self {
            colonies: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Spawn a colony whose species is picked by `roll`
    pub fn spawn(&mut self, x: i64, y: i64, roll: i64) -> Result<&Colony> {
        let code = species_code(roll);
        let Some(species) = species_name(code) else {
            debug!("roll {} maps to unknown species code {}", roll, code);
            return Err(FarmError::InvalidSpecies(code));
        };

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(FarmError::IdsExhausted)?;
        debug!("spawned colony {} ({}) at ({}, {})", id, species, x, y);

        let colony = self
            .colonies
            .entry(id)
            .or_insert_with(|| Colony::new(id, x, y, species));
        Ok(&*colony)
    }

    /// All colonies in ascending id order
    pub fn list(&self) -> impl Iterator<Item = &Colony> + '_ {
        self.colonies.values()
    }

    #[inline]
    pub fn get(&self, id: ColonyId) -> Option<&Colony> {
        self.colonies.get(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colonies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colonies.is_empty()
    }

    /// Add `amount` of `kind` to a colony.
    ///
    /// The id is resolved before the resource kind, so an unknown colony
    /// is reported even when the kind is also bad.
    pub fn give(&mut self, id: ColonyId, kind: &str, amount: i64) -> Result<(&Colony, Resource)> {
        let colony = self.colonies.get_mut(&id).ok_or(FarmError::NotFound(id))?;
        let resource: Resource = kind.parse()?;
        colony.give(resource, amount);
        debug!("colony {} received {} {}", id, amount, resource.label());
        Ok((&*colony, resource))
    }

    /// Compare two colonies' warriors without touching their state
    pub fn fight(&self, first: ColonyId, second: ColonyId) -> Result<FightReport> {
        match (self.colonies.get(&first), self.colonies.get(&second)) {
            (Some(a), Some(b)) => Ok(FightReport {
                first: a.clone(),
                second: b.clone(),
                outcome: a.fight(b),
            }),
            _ => Err(FarmError::PairNotFound(first, second)),
        }
    }
}

impl Default for AntFarm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(farm: &AntFarm) -> Vec<ColonyId> {
        farm.list().map(Colony::id).collect()
    }

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let mut farm = AntFarm::new();

        let first = farm.spawn(0, 0, 1).unwrap();
        assert_eq!(first.id(), 1);
        assert_eq!(first.species(), "Explorer");

        let second = farm.spawn(1, 1, 2).unwrap();
        assert_eq!(second.id(), 2);
        assert_eq!(second.species(), "Marauder");
        assert_eq!((second.x, second.y), (1, 1));

        assert_eq!(ids(&farm), vec![1, 2]);
    }

    #[test]
    fn test_rejected_spawn_consumes_no_id() {
        let mut farm = AntFarm::new();

        assert!(matches!(farm.spawn(0, 0, 5), Err(FarmError::InvalidSpecies(15))));
        assert!(farm.is_empty());

        assert_eq!(farm.spawn(0, 0, 0).unwrap().id(), 1);
        assert_eq!(farm.len(), 1);
    }

    #[test]
    fn test_spawn_fails_when_ids_run_out() {
        let mut farm = AntFarm::new();
        farm.next_id = ColonyId::MAX;

        assert!(matches!(farm.spawn(0, 0, 1), Err(FarmError::IdsExhausted)));
        assert!(farm.is_empty());
        assert_eq!(farm.next_id, ColonyId::MAX);
    }

    #[test]
    fn test_list_is_stable_without_mutation() {
        let mut farm = AntFarm::new();
        for roll in 0..5 {
            farm.spawn(roll, -roll, roll).unwrap();
        }

        let before: Vec<Colony> = farm.list().cloned().collect();
        let after: Vec<Colony> = farm.list().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(before.len(), 5);
    }

    #[test]
    fn test_give_accumulates() {
        let mut farm = AntFarm::new();
        farm.spawn(0, 0, 1).unwrap();

        farm.give(1, "food", 20).unwrap();
        let (colony, resource) = farm.give(1, "food", 30).unwrap();

        assert_eq!(resource, Resource::Food);
        assert_eq!(colony.food, 50);
    }

    #[test]
    fn test_give_missing_colony() {
        let mut farm = AntFarm::new();

        assert!(matches!(farm.give(99, "food", 10), Err(FarmError::NotFound(99))));
        // id is checked before the resource kind
        assert!(matches!(farm.give(99, "gold", 10), Err(FarmError::NotFound(99))));
        assert!(farm.is_empty());
    }

    #[test]
    fn test_give_unknown_resource() {
        let mut farm = AntFarm::new();
        farm.spawn(0, 0, 1).unwrap();

        assert!(matches!(
            farm.give(1, "gold", 10),
            Err(FarmError::UnknownResource(kind)) if kind == "gold"
        ));
        let colony = farm.get(1).unwrap();
        assert_eq!((colony.food, colony.workers, colony.warriors), (0, 0, 0));
    }

    #[test]
    fn test_fight_scenario() {
        let mut farm = AntFarm::new();
        farm.spawn(0, 0, 1).unwrap();
        farm.give(1, "food", 50).unwrap();
        farm.give(1, "warrior", 5).unwrap();
        farm.spawn(1, 1, 2).unwrap();
        farm.give(2, "warrior", 10).unwrap();

        let report = farm.fight(1, 2).unwrap();
        assert_eq!(report.outcome, FightOutcome::SecondWins);
        assert_eq!(report.second.species(), "Marauder");

        let mirrored = farm.fight(2, 1).unwrap();
        assert_eq!(mirrored.outcome, FightOutcome::FirstWins);

        // fights leave colonies untouched
        assert_eq!(farm.get(1).unwrap().warriors, 5);
        assert_eq!(farm.get(2).unwrap().warriors, 10);
    }

    #[test]
    fn test_fight_self_is_draw() {
        let mut farm = AntFarm::new();
        farm.spawn(0, 0, 1).unwrap();
        farm.give(1, "warrior", 3).unwrap();

        assert_eq!(farm.fight(1, 1).unwrap().outcome, FightOutcome::Draw);
    }

    #[test]
    fn test_fight_missing_colony() {
        let mut farm = AntFarm::new();
        farm.spawn(0, 0, 1).unwrap();

        assert!(matches!(farm.fight(1, 2), Err(FarmError::PairNotFound(1, 2))));
        assert!(matches!(farm.fight(3, 1), Err(FarmError::PairNotFound(3, 1))));
    }
}
