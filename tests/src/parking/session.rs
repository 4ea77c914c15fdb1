use chrono::TimeDelta;
use parkr_core::error::ParkingError;
use parkr_core::session::{Outcome, Session};

use crate::utils::LotContext;

#[test]
fn shell_transcript() {
    let LotContext { lot, clock } = LotContext::new(2);
    let mut session = Session::new(lot);

    let script = [
        ("park OD02A1234 car", true),
        ("park OD33B9876 bike", true),
        ("park OD02A1234 bike", false),
        ("park KA01X0001 car", false),
        ("status", true),
    ];
    for (line, should_succeed) in script {
        assert_eq!(session.execute_line(line).is_ok(), should_succeed, "request: {line}");
    }

    clock.advance(TimeDelta::minutes(30));

    let Outcome::Departed(departure) = session.execute_line("leave 1").unwrap() else {
        panic!("leave should produce a departure");
    };
    assert_eq!(departure.vehicle.id(), "OD02A1234");
    assert_eq!(departure.fee, 10.0);
    assert_eq!(departure.duration_minutes(), 30.0);

    let Outcome::Parked { slot_id, .. } = session.execute_line("park KA01X0001 car").unwrap() else {
        panic!("park should succeed once slot 1 is free");
    };
    assert_eq!(slot_id, 1);
}

#[test]
fn shell_rejections() {
    let LotContext { lot, .. } = LotContext::new(1);
    let mut session = Session::new(lot);

    assert!(matches!(session.execute_line("leave 1"), Err(ParkingError::SlotAlreadyFree { .. })));
    assert!(matches!(session.execute_line("leave 2"), Err(ParkingError::InvalidSlot { .. })));
    assert!(matches!(session.execute_line("leave zero"), Err(ParkingError::InvalidInput(_))));
    assert!(matches!(session.execute_line("board A1"), Err(ParkingError::InvalidInput(_))));
    assert_eq!(session.lot().occupied_count(), 0);
}
