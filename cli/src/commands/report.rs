//! Console rendering of lot events, shared by the demo and the shell.

use colored::*;
use parkr_common::config::Config;
use parkr_core::VehicleCategory;
use parkr_core::error::ParkingError;
use parkr_core::lot::Departure;
use parkr_core::slot::SlotStatus;
use tracing::{info, warn};

use crate::terminal::{colors, format, print};

pub fn parked(slot_id: usize, vehicle_id: &str, category: VehicleCategory, cfg: &Config) {
    if cfg.quiet > 1 {
        print::print(&format!("{category} {vehicle_id} parked at slot {slot_id}"));
        return;
    }

    info!(
        "{} {} parked at slot {}",
        category,
        vehicle_id.color(colors::VEHICLE_ID),
        slot_id.to_string().color(colors::ACCENT).bold()
    );
}

pub fn rejected(err: &ParkingError) {
    warn!("{err}");
}

pub fn departed(departure: &Departure, cfg: &Config) {
    if cfg.quiet > 1 {
        print::print(&format!(
            "{} left slot {} after {}, fee {}",
            departure.vehicle.id(),
            departure.slot_id,
            format::minutes(departure),
            format::money(departure.fee)
        ));
        return;
    }

    print::header("vehicle exited", cfg.quiet);
    print::tree_head(departure.vehicle.id());
    print::as_tree_one_level(format::departure_details(departure));
}

pub fn status(report: &[SlotStatus], cfg: &Config) {
    let width: usize = format::slot_width(report.len());
    if cfg.quiet > 1 {
        for slot in report {
            print::print(&format::status_line(slot, width));
        }
        return;
    }

    print::header("parking lot status", cfg.quiet);
    for slot in report {
        print::print_status(format::colored_status_line(slot, width));
    }

    if cfg.quiet == 0 {
        let occupied: usize = report.iter().filter(|slot| slot.is_occupied()).count();
        let summary: String = format!(
            "{} of {} slots occupied",
            occupied.to_string().bold().yellow(),
            report.len().to_string().bold().green()
        );
        print::fat_separator();
        print::centerln(&summary);
    }
}
