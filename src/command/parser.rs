use crate::colony::ColonyId;
use crate::error::{FarmError, Result};
use std::str::FromStr;

/// One user action with its typed arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `spawn x y [roll]`; a missing roll is drawn by the session
    Spawn { x: i64, y: i64, roll: Option<i64> },
    /// `list_colonies`
    List,
    /// `give id kind amount`; the kind is resolved by the farm
    Give {
        id: ColonyId,
        kind: String,
        amount: i64,
    },
    /// `fight id1 id2`
    Fight { first: ColonyId, second: ColonyId },
    /// `exit`
    Exit,
    /// Any other leading token, including an empty line
    Unknown(String),
}

const SPAWN_USAGE: &str = "spawn <x> <y> [roll]";
const GIVE_USAGE: &str = "give <id> <food|worker|warrior> <amount>";
const FIGHT_USAGE: &str = "fight <id1> <id2>";

impl Command {
    /// Parse one input line.
    ///
    /// Tokens past the expected arguments are ignored. Unknown verbs are not
    /// an error here; they become [`Command::Unknown`].
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or("");

        match verb {
            "spawn" => {
                let bad = || invalid("spawn", SPAWN_USAGE);
                let x = arg(parts.next()).ok_or_else(bad)?;
                let y = arg(parts.next()).ok_or_else(bad)?;
                let roll = match parts.next() {
                    Some(tok) => Some(tok.parse().map_err(|_| bad())?),
                    None => None,
                };
                Ok(Command::Spawn { x, y, roll })
            }
            "list_colonies" => Ok(Command::List),
            "give" => {
                let bad = || invalid("give", GIVE_USAGE);
                let id = arg(parts.next()).ok_or_else(bad)?;
                let kind = parts.next().ok_or_else(bad)?.to_string();
                let amount = arg(parts.next()).ok_or_else(bad)?;
                Ok(Command::Give { id, kind, amount })
            }
            "fight" => {
                let bad = || invalid("fight", FIGHT_USAGE);
                let first = arg(parts.next()).ok_or_else(bad)?;
                let second = arg(parts.next()).ok_or_else(bad)?;
                Ok(Command::Fight { first, second })
            }
            "exit" => Ok(Command::Exit),
            other => Ok(Command::Unknown(other.to_string())),
        }
    }
}

#[inline]
fn arg<T: FromStr>(token: Option<&str>) -> Option<T> {
    token?.parse().ok()
}

fn invalid(verb: &'static str, usage: &'static str) -> FarmError {
    FarmError::InvalidArguments { verb, usage }
}
