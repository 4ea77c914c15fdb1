//! # Parkr Core
//!
//! The parking lot itself: vehicle records, slots, the lot that hands them out,
//! and the session used by the interactive shell.
//!
//! * [`vehicle::VehicleRecord`]: a parked vehicle and its entry time. Knows its own fee.
//! * [`slot::Slot`]: one numbered space holding at most one record.
//! * [`lot::Lot`]: fixed row of slots with first-fit allocation and billing on release.
//! * [`session::Session`]: executes shell [`Request`](parkr_common::request::Request)s against a lot.
//! * [`clock::Clock`]: source of "now", swappable for [`clock::ManualClock`] in tests.

pub mod clock;
pub mod error;
pub mod lot;
pub mod session;
pub mod slot;
pub mod vehicle;

pub use parkr_common::vehicle::VehicleCategory;
