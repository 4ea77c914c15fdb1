use parkr_common::error::RequestError;
use thiserror::Error;

use crate::vehicle::VehicleRecord;

/// Everything a lot operation can refuse to do.
///
/// None of these are fatal. Variants that reject an arriving vehicle hand its
/// record back so the caller still owns it.
#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no available slot for {} ({})", .record.category(), .record.id())]
    LotFull { record: VehicleRecord },

    #[error("invalid slot: {slot_id} (slots are numbered 1 to {capacity})")]
    InvalidSlot { slot_id: usize, capacity: usize },

    #[error("slot {slot_id} is already empty")]
    SlotAlreadyFree { slot_id: usize },

    #[error("slot {slot_id} is already occupied")]
    AlreadyOccupied { slot_id: usize, record: VehicleRecord },

    #[error("vehicle {} is already parked in slot {slot_id}", .record.id())]
    AlreadyParked { slot_id: usize, record: VehicleRecord },
}

impl ParkingError {
    /// Gives back the vehicle record a rejected arrival carried, if any.
    pub fn into_record(self) -> Option<VehicleRecord> {
        match self {
            ParkingError::LotFull { record }
            | ParkingError::AlreadyOccupied { record, .. }
            | ParkingError::AlreadyParked { record, .. } => Some(record),
            _ => None,
        }
    }
}

impl From<RequestError> for ParkingError {
    fn from(err: RequestError) -> Self {
        ParkingError::InvalidInput(err.to_string())
    }
}
