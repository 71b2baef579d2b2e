//! Unit tests for the scripted traffic model.

use ix_core::{Point3, VehicleId};

use crate::{MotionSource, ScriptedTraffic, VehicleScript, VehicleController};

fn p(x: f32, y: f32) -> Point3 {
    Point3::new(x, y, 0.0)
}

#[test]
fn snapshot_contains_only_spawned_vehicles() {
    let traffic = ScriptedTraffic::new()
        .with_vehicle(VehicleScript::new(VehicleId(1), p(-30.0, 0.0), p(30.0, 0.0)))
        .with_vehicle(
            VehicleScript::new(VehicleId(2), p(0.0, -30.0), p(0.0, 30.0))
                .with_spawn_delay(5.0),
        );

    let snap = traffic.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].id, VehicleId(1));
}

#[test]
fn delayed_vehicle_appears_after_its_delay() {
    let mut traffic = ScriptedTraffic::new().with_vehicle(
        VehicleScript::new(VehicleId(2), p(0.0, -30.0), p(0.0, 30.0)).with_spawn_delay(1.0),
    );

    for _ in 0..19 {
        traffic.advance(0.05);
    }
    assert!(traffic.snapshot().is_empty());
    traffic.advance(0.05); // elapsed hits 1.0 exactly
    assert_eq!(traffic.snapshot().len(), 1);
}

#[test]
fn permitted_vehicle_moves_at_cruise_speed() {
    let mut traffic = ScriptedTraffic::new().with_vehicle(
        VehicleScript::new(VehicleId(1), p(-30.0, 0.0), p(30.0, 0.0)).with_speed(10.0),
    );

    traffic.advance(0.5);
    let pos = traffic.position(VehicleId(1)).unwrap();
    assert!((pos.x - -25.0).abs() < 1e-3);
    assert!(pos.y.abs() < 1e-6);
}

#[test]
fn held_vehicle_does_not_move() {
    let mut traffic = ScriptedTraffic::new().with_vehicle(
        VehicleScript::new(VehicleId(1), p(-30.0, 0.0), p(30.0, 0.0)),
    );

    traffic.apply(VehicleId(1), false);
    traffic.advance(1.0);
    let pos = traffic.position(VehicleId(1)).unwrap();
    assert!((pos.x - -30.0).abs() < 1e-6);

    traffic.apply(VehicleId(1), true);
    traffic.advance(1.0);
    assert!(traffic.position(VehicleId(1)).unwrap().x > -30.0);
}

#[test]
fn vehicle_despawns_past_its_travel_limit() {
    let mut traffic = ScriptedTraffic::new().with_vehicle(
        VehicleScript::new(VehicleId(1), p(-30.0, 0.0), p(30.0, 0.0))
            .with_speed(10.0)
            .with_travel_limit(20.0),
    );

    traffic.advance(1.0);
    assert_eq!(traffic.snapshot().len(), 1);
    traffic.advance(1.0); // traveled hits 20 m
    assert!(traffic.snapshot().is_empty());
    assert_eq!(traffic.position(VehicleId(1)), None);
}

#[test]
fn heading_is_normalized_from_spawn_and_target() {
    let mut traffic = ScriptedTraffic::new().with_vehicle(
        VehicleScript::new(VehicleId(1), p(0.0, 0.0), p(3.0, 4.0)).with_speed(5.0),
    );

    traffic.advance(1.0);
    let pos = traffic.position(VehicleId(1)).unwrap();
    assert!((pos.x - 3.0).abs() < 1e-3);
    assert!((pos.y - 4.0).abs() < 1e-3);
}

#[test]
fn apply_to_unknown_id_is_a_noop() {
    let mut traffic = ScriptedTraffic::new().with_vehicle(
        VehicleScript::new(VehicleId(1), p(-30.0, 0.0), p(30.0, 0.0)),
    );
    traffic.apply(VehicleId(99), false);
    traffic.advance(1.0);
    assert!(traffic.position(VehicleId(1)).unwrap().x > -30.0);
}
