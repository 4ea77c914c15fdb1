use std::io::{self, BufRead};

use colored::*;
use console::Term;
use parkr_common::config::Config;
use parkr_core::lot::Lot;
use parkr_core::session::{Outcome, Session};
use tracing::{debug, info};

use crate::commands::report;
use crate::terminal::{colors, print};

const PROMPT: &str = "parkr> ";

const HELP: &[(&str, &str)] = &[
    ("park <id> <car|bike>", "park a vehicle in the first free slot"),
    ("leave <slot>", "release a slot and print the fee"),
    ("status", "show every slot"),
    ("help", "show this list"),
    ("quit", "leave the shell"),
];

pub fn shell(cfg: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(Lot::new(cfg.slots)?);
    let term = Term::stdout();
    let prompt: Option<&Term> = term.is_term().then_some(&term);

    info!(
        "Lot opened with {} slots, type {} for the list of requests",
        cfg.slots.to_string().bold(),
        "help".color(colors::ACCENT)
    );

    run(&mut session, io::stdin().lock(), prompt, cfg)?;

    print::end_of_program();
    Ok(())
}

/// Executes requests line by line until `quit` or end of input.
///
/// Refused requests are reported and the loop carries on.
pub fn run<R: BufRead>(
    session: &mut Session,
    input: R,
    prompt: Option<&Term>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let mut lines = input.lines();

    loop {
        if let Some(term) = prompt {
            term.write_str(PROMPT)?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line: String = line?;
        let line: &str = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        debug!(request = line, "shell request");
        match session.execute_line(line) {
            Ok(Outcome::Parked {
                slot_id,
                vehicle_id,
                category,
            }) => report::parked(slot_id, &vehicle_id, category, cfg),
            Ok(Outcome::Departed(departure)) => report::departed(&departure, cfg),
            Ok(Outcome::Status(status)) => report::status(&status, cfg),
            Ok(Outcome::Help) => help(),
            Ok(Outcome::Quit) => break,
            Err(err) => report::rejected(&err),
        }
    }

    Ok(())
}

fn help() {
    let width: usize = HELP.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    for (usage, description) in HELP {
        print::aligned_line(usage, width, *description);
    }
}
