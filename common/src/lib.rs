//! # Parkr Common
//!
//! Types shared between the parking core and the command line front-end.
//!
//! * [`config::Config`]: runtime options collected from the command line.
//! * [`vehicle::VehicleCategory`]: the closed set of vehicle kinds and their rates.
//! * [`request::Request`]: a single parsed shell request (`park`, `leave`, `status`, ...).
//! * [`error::RequestError`]: everything that can go wrong while parsing a request.

pub mod config;
pub mod error;
pub mod request;
pub mod vehicle;
