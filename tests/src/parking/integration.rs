use chrono::TimeDelta;
use parkr_core::VehicleCategory;
use parkr_core::error::ParkingError;
use parkr_core::vehicle::VehicleRecord;

use crate::utils::LotContext;

/// Two slots, three arrivals: the third is turned away until the car in slot 1
/// leaves, then takes slot 1 again.
#[test]
fn two_slot_scenario() {
    let mut ctx = LotContext::new(2);

    assert_eq!(ctx.lot.admit("A1", VehicleCategory::Car).unwrap(), 1);
    assert_eq!(ctx.lot.admit("B1", VehicleCategory::Bike).unwrap(), 2);

    let c1 = VehicleRecord::new("C1", VehicleCategory::Car, ctx.lot.now()).unwrap();
    let err = ctx.lot.allocate(c1).unwrap_err();
    assert!(matches!(err, ParkingError::LotFull { .. }), "expected LotFull, got {err:?}");
    let c1 = err.into_record().expect("record must come back with LotFull");

    ctx.clock.advance(TimeDelta::hours(4));
    let departure = ctx.lot.release(1).unwrap();
    assert_eq!(departure.vehicle.id(), "A1");
    assert_eq!(departure.fee, 20.0 * 4.0);

    assert_eq!(ctx.lot.allocate(c1).unwrap(), 1);
    assert_eq!(ctx.lot.find_vehicle("C1"), Some(1));
    assert!(ctx.lot.is_full());
}

#[test]
fn fresh_lot_sizes() {
    for capacity in [1, 2, 4, 10, 64] {
        let ctx = LotContext::new(capacity);
        assert_eq!(ctx.free_ids(), (1..=capacity).collect::<Vec<usize>>());
        assert_eq!(ctx.lot.occupied_count(), 0);
    }
}

#[test]
fn always_lowest_free_slot() {
    let mut ctx = LotContext::new(6);
    for n in 1..=6 {
        ctx.lot.admit(&format!("V{n}"), VehicleCategory::Car).unwrap();
    }

    for slot_id in [5, 2, 4] {
        ctx.lot.release(slot_id).unwrap();
    }
    assert_eq!(ctx.free_ids(), vec![2, 4, 5]);

    for expected in [2, 4, 5] {
        let lowest = ctx.free_ids()[0];
        assert_eq!(lowest, expected);
        assert_eq!(ctx.lot.admit(&format!("N{expected}"), VehicleCategory::Bike).unwrap(), expected);
    }
    assert!(ctx.free_ids().is_empty());
}

#[test]
fn full_lot_is_unchanged_by_refusal() {
    let mut ctx = LotContext::new(3);
    for id in ["A", "B", "C"] {
        ctx.lot.admit(id, VehicleCategory::Bike).unwrap();
    }
    let before = ctx.lot.status_report();

    for id in ["D", "E"] {
        assert!(matches!(
            ctx.lot.admit(id, VehicleCategory::Car),
            Err(ParkingError::LotFull { .. })
        ));
    }
    assert_eq!(ctx.lot.status_report(), before);
}

#[test]
fn releasing_empty_slots() {
    let mut ctx = LotContext::new(2);
    assert!(matches!(ctx.lot.release(1), Err(ParkingError::SlotAlreadyFree { slot_id: 1 })));

    ctx.lot.admit("A1", VehicleCategory::Car).unwrap();
    ctx.lot.release(1).unwrap();
    let before = ctx.lot.status_report();

    assert!(matches!(ctx.lot.release(1), Err(ParkingError::SlotAlreadyFree { slot_id: 1 })));
    assert_eq!(ctx.lot.status_report(), before);
}

#[test]
fn fees_grow_with_time() {
    let mut ctx = LotContext::new(2);
    ctx.lot.admit("CAR", VehicleCategory::Car).unwrap();
    ctx.lot.admit("BIKE", VehicleCategory::Bike).unwrap();

    ctx.clock.advance(TimeDelta::minutes(45));
    let car = ctx.lot.release(1).unwrap();
    ctx.clock.advance(TimeDelta::minutes(45));
    let bike = ctx.lot.release(2).unwrap();

    assert_eq!(car.fee, 15.0);
    assert_eq!(bike.fee, 15.0);
    assert!(bike.duration > car.duration);
}
