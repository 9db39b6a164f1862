//! Text rendering for everything the farm prints.

use crate::colony::{Colony, FightOutcome, Resource};
use crate::error::FarmError;
use crate::farm::FightReport;
use colored::Colorize;
use std::io::{self, Write};

pub const PROMPT: &str = "Enter command: ";

/// One-line status of a colony
pub fn status_line(colony: &Colony) -> String {
    format!(
        "{} Colony Species: {}, Position: ({}, {}), Food: {}, Workers: {}, Warriors: {}",
        format!("[{}]", colony.id()).dimmed(),
        colony.species().bold(),
        colony.x,
        colony.y,
        colony.food,
        colony.workers,
        colony.warriors
    )
}

pub fn write_spawned(out: &mut impl Write, colony: &Colony) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "New colony spawned with species {} at ({}, {}).",
            colony.species(),
            colony.x,
            colony.y
        )
        .green()
    )
}

pub fn write_list<'a>(
    out: &mut impl Write,
    colonies: impl IntoIterator<Item = &'a Colony>,
) -> io::Result<()> {
    let mut colonies = colonies.into_iter().peekable();
    if colonies.peek().is_none() {
        return writeln!(out, "{}", "No colonies have been spawned yet.".yellow());
    }

    writeln!(out, "{}", "List of Colonies:".bright_blue().bold())?;
    for colony in colonies {
        writeln!(out, "{}", status_line(colony))?;
    }
    Ok(())
}

pub fn write_given(
    out: &mut impl Write,
    colony: &Colony,
    resource: Resource,
    amount: i64,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "Gave {} {} to colony {}",
            amount,
            resource.label(),
            colony.species()
        )
        .green()
    )
}

/// Fight summary, a blank line, then both colonies' status
pub fn write_fight(out: &mut impl Write, report: &FightReport) -> io::Result<()> {
    let FightReport {
        first,
        second,
        outcome,
    } = report;

    writeln!(out, "{}", "Fight Summary:".bright_blue().bold())?;
    writeln!(
        out,
        "{} (Warriors: {}) vs {} (Warriors: {})",
        first.species(),
        first.warriors,
        second.species(),
        second.warriors
    )?;
    let verdict = match outcome {
        FightOutcome::FirstWins => format!("{} wins the fight!", first.species()),
        FightOutcome::SecondWins => format!("{} wins the fight!", second.species()),
        FightOutcome::Draw => "It's a draw!".to_string(),
    };
    writeln!(out, "{}\n", verdict.bright_red().bold())?;

    writeln!(out, "{}", status_line(first))?;
    writeln!(out, "{}", status_line(second))
}

pub fn write_error(out: &mut impl Write, err: &FarmError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}

pub fn write_exit(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Exiting program...".dimmed())
}
