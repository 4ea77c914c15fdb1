//! # Vehicle Records
//!
//! A [`VehicleRecord`] is created when a vehicle arrives and is owned by the slot
//! it parks in until it leaves. The fee is derived from the record's category
//! and the time between entry and exit.

use std::time::Duration;

use chrono::{DateTime, Utc};
use parkr_common::vehicle::VehicleCategory;

use crate::error::ParkingError;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    id: String,
    category: VehicleCategory,
    entered_at: DateTime<Utc>,
}

impl VehicleRecord {
    /// Creates a record for a vehicle entering at `entered_at`.
    ///
    /// The identifier is trimmed and must not be empty.
    pub fn new(
        id: impl Into<String>,
        category: VehicleCategory,
        entered_at: DateTime<Utc>,
    ) -> Result<Self, ParkingError> {
        let id: String = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ParkingError::InvalidInput(
                "vehicle identifier must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: id.to_string(),
            category,
            entered_at,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn entered_at(&self) -> DateTime<Utc> {
        self.entered_at
    }

    /// Time spent in the lot if the vehicle leaves at `exit`.
    ///
    /// An exit before the entry counts as zero.
    pub fn duration_until(&self, exit: DateTime<Utc>) -> Duration {
        (exit - self.entered_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Amount owed for leaving at `exit`: hourly rate times fractional hours.
    pub fn compute_fee(&self, exit: DateTime<Utc>) -> f64 {
        let hours: f64 = self.duration_until(exit).as_secs_f64() / SECONDS_PER_HOUR;
        self.category.rate_per_hour() * hours
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
