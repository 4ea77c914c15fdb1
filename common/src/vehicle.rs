//! # Vehicle Categories
//!
//! The closed set of vehicles the lot accepts. Every category carries its own
//! hourly rate; adding a category means adding a rate to [`VehicleCategory::rate_per_hour`].

use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;

/// Kind of vehicle occupying a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Car,
    Bike,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 2] = [VehicleCategory::Car, VehicleCategory::Bike];

    /// Price of one hour of parking, in currency units.
    pub fn rate_per_hour(self) -> f64 {
        match self {
            VehicleCategory::Car => 20.0,
            VehicleCategory::Bike => 10.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Bike => "Bike",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = RequestError;

    /// Parses a category name, ignoring case ("car", "Car", "BIKE").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RequestError::UnknownCategory(trimmed.to_string()))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        assert_eq!(VehicleCategory::Car.rate_per_hour(), 20.0);
        assert_eq!(VehicleCategory::Bike.rate_per_hour(), 10.0);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("car".parse::<VehicleCategory>(), Ok(VehicleCategory::Car));
        assert_eq!("BIKE".parse::<VehicleCategory>(), Ok(VehicleCategory::Bike));
        assert_eq!(" Bike ".parse::<VehicleCategory>(), Ok(VehicleCategory::Bike));
    }

    #[test]
    fn test_parse_unknown() {
        let result = "truck".parse::<VehicleCategory>();
        assert_eq!(result, Err(RequestError::UnknownCategory("truck".to_string())));
        assert_eq!(
            result.unwrap_err().to_string(),
            "unknown vehicle category: truck (expected car or bike)"
        );
    }

    #[test]
    fn test_display_round_trips() {
        for category in VehicleCategory::ALL {
            assert_eq!(category.to_string().parse::<VehicleCategory>(), Ok(category));
        }
    }
}
