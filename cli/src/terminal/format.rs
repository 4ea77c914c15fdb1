use crate::terminal::colors;
use chrono::{DateTime, Utc};
use colored::*;
use parkr_core::lot::Departure;
use parkr_core::slot::SlotStatus;

type Detail = (String, ColoredString);

pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn minutes(departure: &Departure) -> String {
    format!("{:.2} minutes", departure.duration_minutes())
}

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Width slot numbers are padded to, at least two columns.
pub fn slot_width(capacity: usize) -> usize {
    capacity.to_string().len().max(2)
}

pub fn occupancy(status: &SlotStatus) -> String {
    match &status.occupant {
        Some(occupant) => format!("Occupied by {} ({})", occupant.category, occupant.id),
        None => String::from("Available"),
    }
}

pub fn status_line(status: &SlotStatus, width: usize) -> String {
    format!("Slot {:>width$}: {}", status.id, occupancy(status))
}

pub fn colored_status_line(status: &SlotStatus, width: usize) -> String {
    let label: ColoredString = format!("Slot {:>width$}", status.id).color(colors::PRIMARY);
    let state: ColoredString = match status.occupant {
        Some(_) => occupancy(status).color(colors::OCCUPIED),
        None => occupancy(status).color(colors::FREE),
    };
    format!("{}{} {}", label, ":".color(colors::SEPARATOR), state)
}

pub fn departure_details(departure: &Departure) -> Vec<Detail> {
    vec![
        (
            "Vehicle".to_string(),
            departure.vehicle.id().color(colors::VEHICLE_ID),
        ),
        ("Type".to_string(), departure.vehicle.category().to_string().normal()),
        ("Slot".to_string(), departure.slot_id.to_string().color(colors::ACCENT)),
        ("Entered".to_string(), timestamp(departure.entered_at()).normal()),
        ("Exited".to_string(), timestamp(departure.exited_at).normal()),
        ("Duration".to_string(), minutes(departure).yellow()),
        ("Fee".to_string(), money(departure.fee).color(colors::FEE).bold()),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use parkr_core::VehicleCategory;
    use parkr_core::clock::ManualClock;
    use parkr_core::lot::Lot;
    use parkr_core::slot::Occupant;

    #[test]
    fn test_status_lines() {
        let free = SlotStatus { id: 2, occupant: None };
        let taken = SlotStatus {
            id: 1,
            occupant: Some(Occupant {
                id: "OD02A1234".to_string(),
                category: VehicleCategory::Car,
            }),
        };

        assert_eq!(status_line(&taken, 2), "Slot  1: Occupied by Car (OD02A1234)");
        assert_eq!(status_line(&free, 2), "Slot  2: Available");
        assert_eq!(status_line(&free, 3), "Slot   2: Available");
    }

    #[test]
    fn test_slot_width() {
        assert_eq!(slot_width(4), 2);
        assert_eq!(slot_width(99), 2);
        assert_eq!(slot_width(150), 3);
    }

    #[test]
    fn test_receipt_values() {
        let clock = ManualClock::default();
        let mut lot = Lot::with_clock(1, clock.clone()).unwrap();
        lot.admit("OD02A1234", VehicleCategory::Car).unwrap();
        clock.advance(TimeDelta::seconds(3));

        let departure = lot.release(1).unwrap();
        assert_eq!(minutes(&departure), "0.05 minutes");
        assert_eq!(money(departure.fee), "0.02");
        assert_eq!(timestamp(departure.entered_at()), "1970-01-01 00:00:00 UTC");
        assert_eq!(departure_details(&departure).len(), 7);
    }
}
