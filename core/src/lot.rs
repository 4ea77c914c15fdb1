//! # Parking Lot
//!
//! A fixed row of slots numbered `1..=N`.
//!
//! ## Allocation
//! Arrivals take the lowest-numbered free slot (first fit). There is no
//! reservation or priority; the same sequence of requests always yields the
//! same slot numbers.
//!
//! ## Departure
//! Releasing a slot reads the clock, bills the vehicle, and returns a
//! [`Departure`] receipt. The slot is free again afterwards.

use std::num::NonZeroUsize;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parkr_common::vehicle::VehicleCategory;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::ParkingError;
use crate::slot::{Slot, SlotStatus};
use crate::vehicle::VehicleRecord;

pub struct Lot {
    slots: Vec<Slot>,
    clock: Box<dyn Clock>,
}

/// Receipt for a vehicle that left the lot.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub slot_id: usize,
    pub vehicle: VehicleRecord,
    pub exited_at: DateTime<Utc>,
    pub duration: Duration,
    pub fee: f64,
}

impl Departure {
    fn bill(slot_id: usize, vehicle: VehicleRecord, exited_at: DateTime<Utc>) -> Self {
        Self {
            slot_id,
            duration: vehicle.duration_until(exited_at),
            fee: vehicle.compute_fee(exited_at),
            vehicle,
            exited_at,
        }
    }

    pub fn entered_at(&self) -> DateTime<Utc> {
        self.vehicle.entered_at()
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }
}

impl Lot {
    /// Builds a lot of `capacity` free slots using wall clock time.
    pub fn new(capacity: usize) -> Result<Self, ParkingError> {
        Self::with_clock(capacity, SystemClock)
    }

    pub fn with_clock(capacity: usize, clock: impl Clock + 'static) -> Result<Self, ParkingError> {
        if capacity == 0 {
            return Err(ParkingError::InvalidInput(
                "a lot needs at least one slot".to_string(),
            ));
        }

        let slots: Vec<Slot> = (1..=capacity)
            .filter_map(NonZeroUsize::new)
            .map(Slot::new)
            .collect();

        Ok(Self {
            slots,
            clock: Box::new(clock),
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub fn free_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Slot::is_occupied)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Slot currently holding the vehicle with identifier `vehicle_id`.
    pub fn find_vehicle(&self, vehicle_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| slot.vehicle().is_some_and(|record| record.id() == vehicle_id))
            .map(Slot::id)
    }

    /// Parks `record` in the lowest-numbered free slot and returns that slot's id.
    ///
    /// On failure the record travels back inside the error, see [`ParkingError::into_record`].
    pub fn allocate(&mut self, record: VehicleRecord) -> Result<usize, ParkingError> {
        if let Some(slot_id) = self.find_vehicle(record.id()) {
            return Err(ParkingError::AlreadyParked { slot_id, record });
        }

        let Some(slot) = self.slots.iter_mut().find(|slot| !slot.is_occupied()) else {
            debug!(vehicle = record.id(), "lot full");
            return Err(ParkingError::LotFull { record });
        };

        let slot_id: usize = slot.id();
        debug!(slot_id, vehicle = record.id(), category = %record.category(), "vehicle parked");
        slot.assign(record)?;
        Ok(slot_id)
    }

    /// Creates a record stamped with the lot's clock and allocates it.
    pub fn admit(
        &mut self,
        vehicle_id: &str,
        category: VehicleCategory,
    ) -> Result<usize, ParkingError> {
        let record = VehicleRecord::new(vehicle_id, category, self.clock.now())?;
        self.allocate(record)
    }

    /// Empties slot `slot_id`, bills its vehicle at the current time and returns the receipt.
    pub fn release(&mut self, slot_id: usize) -> Result<Departure, ParkingError> {
        let capacity: usize = self.capacity();
        let slot: &mut Slot = slot_id
            .checked_sub(1)
            .and_then(|idx| self.slots.get_mut(idx))
            .ok_or(ParkingError::InvalidSlot { slot_id, capacity })?;

        let vehicle: VehicleRecord = slot.release()?;
        let departure = Departure::bill(slot_id, vehicle, self.clock.now());

        debug!(
            slot_id,
            vehicle = departure.vehicle.id(),
            seconds = departure.duration.as_secs(),
            fee = departure.fee,
            "vehicle left"
        );
        Ok(departure)
    }

    /// Occupancy of every slot, in slot order.
    pub fn status_report(&self) -> Vec<SlotStatus> {
        self.slots.iter().map(Slot::status).collect()
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
