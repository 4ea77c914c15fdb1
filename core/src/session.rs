use parkr_common::request::Request;
use parkr_common::vehicle::VehicleCategory;

use crate::error::ParkingError;
use crate::lot::{Departure, Lot};
use crate::slot::SlotStatus;

/// A lot kept alive across shell requests.
pub struct Session {
    lot: Lot,
}

/// What a successfully executed request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Parked {
        slot_id: usize,
        vehicle_id: String,
        category: VehicleCategory,
    },
    Departed(Departure),
    Status(Vec<SlotStatus>),
    Help,
    Quit,
}

impl Session {
    pub fn new(lot: Lot) -> Self {
        Self { lot }
    }

    pub fn lot(&self) -> &Lot {
        &self.lot
    }

    pub fn execute(&mut self, request: Request) -> Result<Outcome, ParkingError> {
        match request {
            Request::Park { id, category } => {
                let slot_id = self.lot.admit(&id, category)?;
                Ok(Outcome::Parked {
                    slot_id,
                    vehicle_id: id,
                    category,
                })
            }
            Request::Leave { slot_id } => self.lot.release(slot_id.get()).map(Outcome::Departed),
            Request::Status => Ok(Outcome::Status(self.lot.status_report())),
            Request::Help => Ok(Outcome::Help),
            Request::Quit => Ok(Outcome::Quit),
        }
    }

    /// Parses and executes one line of shell input.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, ParkingError> {
        let request: Request = line.parse()?;
        self.execute(request)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
