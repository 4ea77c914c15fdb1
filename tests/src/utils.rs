use chrono::{DateTime, TimeDelta, Utc};
use parkr_core::clock::ManualClock;
use parkr_core::lot::Lot;

/// Morning of an ordinary day, so timestamps in failures are readable.
pub fn opening_time() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(20_000) + TimeDelta::hours(8)
}

pub struct LotContext {
    pub lot: Lot,
    pub clock: ManualClock,
}

impl LotContext {
    pub fn new(capacity: usize) -> Self {
        let clock = ManualClock::new(opening_time());
        let lot = Lot::with_clock(capacity, clock.clone()).expect("capacity must be positive");
        Self { lot, clock }
    }

    pub fn free_ids(&self) -> Vec<usize> {
        self.lot
            .status_report()
            .iter()
            .filter(|status| !status.is_occupied())
            .map(|status| status.id)
            .collect()
    }
}
