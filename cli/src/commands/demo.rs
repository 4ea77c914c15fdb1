use parkr_common::config::Config;
use parkr_core::VehicleCategory;
use parkr_core::lot::{Departure, Lot};
use tracing::info;

use crate::commands::report;
use crate::terminal::spinner;

const DEMO_VEHICLES: [(&str, VehicleCategory); 2] = [
    ("OD02A1234", VehicleCategory::Car),
    ("OD33B9876", VehicleCategory::Bike),
];

/// Parks the demo vehicles, waits `cfg.delay`, then lets slot 1 leave.
pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let mut lot = Lot::new(cfg.slots)?;
    replay(&mut lot, cfg);
    Ok(())
}

fn replay(lot: &mut Lot, cfg: &Config) -> Option<Departure> {
    for (vehicle_id, category) in DEMO_VEHICLES {
        match lot.admit(vehicle_id, category) {
            Ok(slot_id) => report::parked(slot_id, vehicle_id, category, cfg),
            Err(err) => report::rejected(&err),
        }
    }

    report::status(&lot.status_report(), cfg);

    info!("Simulating time delay... ({} seconds)", cfg.delay.as_secs());
    if cfg.quiet > 0 {
        std::thread::sleep(cfg.delay);
    } else {
        spinner::wait(cfg.delay);
    }

    let departure = match lot.release(1) {
        Ok(departure) => {
            report::departed(&departure, cfg);
            Some(departure)
        }
        Err(err) => {
            report::rejected(&err);
            None
        }
    };

    report::status(&lot.status_report(), cfg);
    departure
}
