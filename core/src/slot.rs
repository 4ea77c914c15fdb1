use std::num::NonZeroUsize;

use parkr_common::vehicle::VehicleCategory;

use crate::error::ParkingError;
use crate::vehicle::VehicleRecord;

/// A single numbered parking space.
///
/// Occupancy is the presence of a record, there is no separate flag to keep in sync.
#[derive(Debug, Clone)]
pub struct Slot {
    id: NonZeroUsize,
    vehicle: Option<VehicleRecord>,
}

/// Read-only view of a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStatus {
    pub id: usize,
    pub occupant: Option<Occupant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub id: String,
    pub category: VehicleCategory,
}

impl SlotStatus {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

impl Slot {
    pub fn new(id: NonZeroUsize) -> Self {
        Self { id, vehicle: None }
    }

    pub fn id(&self) -> usize {
        self.id.get()
    }

    pub fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    pub fn vehicle(&self) -> Option<&VehicleRecord> {
        self.vehicle.as_ref()
    }

    /// Parks `record` here. An occupied slot refuses and returns the record inside the error.
    pub fn assign(&mut self, record: VehicleRecord) -> Result<(), ParkingError> {
        if self.is_occupied() {
            return Err(ParkingError::AlreadyOccupied {
                slot_id: self.id(),
                record,
            });
        }
        self.vehicle = Some(record);
        Ok(())
    }

    /// Empties the slot and hands the record to the caller.
    pub fn release(&mut self) -> Result<VehicleRecord, ParkingError> {
        self.vehicle
            .take()
            .ok_or(ParkingError::SlotAlreadyFree { slot_id: self.id() })
    }

    pub fn status(&self) -> SlotStatus {
        SlotStatus {
            id: self.id(),
            occupant: self.vehicle.as_ref().map(|record| Occupant {
                id: record.id().to_string(),
                category: record.category(),
            }),
        }
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
