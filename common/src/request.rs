//! # Shell Requests
//!
//! Parses one line typed into the interactive shell.
//!
//! Supported forms:
//! * `park <id> <category>` (alias `p`)
//! * `leave <slot>` (alias `l`)
//! * `status` (alias `st`)
//! * `help` / `?`
//! * `quit` / `exit` / `q`

use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::RequestError;
use crate::vehicle::VehicleCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// A vehicle arrives and asks for a slot.
    Park { id: String, category: VehicleCategory },
    /// The vehicle in the given slot leaves and pays.
    Leave { slot_id: NonZeroUsize },
    /// Occupancy of every slot.
    Status,
    Help,
    Quit,
}

impl FromStr for Request {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or(RequestError::Empty)?;

        let request = match command.to_ascii_lowercase().as_str() {
            "park" | "p" => parse_park(&mut words)?,
            "leave" | "l" => parse_leave(&mut words)?,
            "status" | "st" => Request::Status,
            "help" | "?" => Request::Help,
            "quit" | "exit" | "q" => Request::Quit,
            _ => return Err(RequestError::UnknownCommand(command.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(RequestError::UnexpectedArgument {
                command: request.name(),
                argument: extra.to_string(),
            });
        }

        Ok(request)
    }
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::Park { .. } => "park",
            Request::Leave { .. } => "leave",
            Request::Status => "status",
            Request::Help => "help",
            Request::Quit => "quit",
        }
    }
}

fn parse_park<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Request, RequestError> {
    let id = words.next().ok_or(RequestError::MissingArgument {
        command: "park",
        argument: "id",
    })?;
    let category = words
        .next()
        .ok_or(RequestError::MissingArgument {
            command: "park",
            argument: "category",
        })?
        .parse::<VehicleCategory>()?;

    Ok(Request::Park {
        id: id.to_string(),
        category,
    })
}

fn parse_leave<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Request, RequestError> {
    let raw = words.next().ok_or(RequestError::MissingArgument {
        command: "leave",
        argument: "slot",
    })?;
    let slot_id = raw
        .parse::<NonZeroUsize>()
        .map_err(|_| RequestError::InvalidSlotNumber(raw.to_string()))?;

    Ok(Request::Leave { slot_id })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
