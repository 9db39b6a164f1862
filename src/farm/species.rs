/// Species names indexed by `code - 1`; valid codes are 1..=14
const SPECIES: [&str; 14] = [
    "Killer",
    "Worker",
    "Hunter",
    "Scout",
    "Defender",
    "Gatherer",
    "Builder",
    "Shaman",
    "Protector",
    "Warrior",
    "Explorer",
    "Marauder",
    "Champion",
    "Strategist",
];

/// Map a roll to its species code.
///
/// `%` keeps the sign of the roll, so non-negative rolls land in 10..=15
/// and negative rolls in 5..=10.
#[inline]
pub const fn species_code(roll: i64) -> i64 {
    (roll % 6) + 10
}

/// Look up a species code; `None` if the table has no entry for it
pub fn species_name(code: i64) -> Option<&'static str> {
    let idx = usize::try_from(code.checked_sub(1)?).ok()?;
    SPECIES.get(idx).copied()
}
