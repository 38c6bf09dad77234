#![allow(clippy::float_cmp)]

use super::*;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-4;

fn throttle() -> DriveIntent {
    DriveIntent { throttle: 1.0, ..DriveIntent::default() }
}

// =============================================================
// Transform
// =============================================================

#[test]
fn zero_heading_faces_positive_z() {
    let t = VehicleTransform { position: Vec3::ZERO, heading: 0.0 };
    assert!((t.forward() - Vec3::Z).length() < EPSILON);
}

#[test]
fn rotate_offset_keeps_height() {
    let r = rotate_offset(Vec3::new(1.0, 2.0, 3.0), 1.3);
    assert_eq!(r.y, 2.0);
}

#[test]
fn rotate_offset_quarter_turn() {
    let r = rotate_offset(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
    assert!((r - Vec3::new(1.0, 0.0, 0.0)).length() < EPSILON);
}

#[test]
fn exit_point_at_zero_heading_is_offset_from_car() {
    let t = VehicleTransform { position: Vec3::new(10.0, 0.0, -5.0), heading: 0.0 };
    let exit = t.exit_point();
    assert!((exit - Vec3::new(9.2, 0.0, -6.2)).length() < EPSILON);
}

#[test]
fn seat_point_follows_heading() {
    let t = VehicleTransform { position: Vec3::ZERO, heading: std::f32::consts::PI };
    let seat = t.seat_point();
    assert!((seat - Vec3::new(0.35, 1.0, -0.6)).length() < EPSILON);
}

// =============================================================
// Integration
// =============================================================

#[test]
fn default_vehicle_is_parked_at_spawn() {
    let v = Vehicle::default();
    assert_eq!(v.position, VEHICLE_SPAWN);
    assert_eq!(v.speed(), 0.0);
    assert_eq!(v.gear, 1);
    assert_eq!(v.rpm, IDLE_RPM);
}

#[test]
fn throttle_accelerates_along_heading() {
    let mut v = Vehicle::default();
    v.step(Some(throttle()), DT);
    assert!(v.velocity.y > 0.0);
    assert_eq!(v.velocity.x, 0.0);
    assert!(v.position.z > VEHICLE_SPAWN.z);
}

#[test]
fn friction_matches_per_frame_factor_at_reference_rate() {
    let mut v = Vehicle { velocity: Vec2::new(0.0, 10.0), ..Vehicle::default() };
    v.step(None, DT);
    assert!((v.velocity.y - 9.2).abs() < EPSILON);
}

#[test]
fn handbrake_slows_faster_than_coasting() {
    let mut coast = Vehicle { velocity: Vec2::new(0.0, 10.0), ..Vehicle::default() };
    let mut brake = coast;
    coast.step(Some(DriveIntent::default()), DT);
    brake.step(Some(DriveIntent { handbrake: true, ..DriveIntent::default() }), DT);
    assert!(brake.speed() < coast.speed());
}

#[test]
fn friction_is_frame_rate_independent() {
    let mut one = Vehicle { velocity: Vec2::new(0.0, 10.0), ..Vehicle::default() };
    let mut two = one;
    one.step(None, 2.0 * DT);
    two.step(None, DT);
    two.step(None, DT);
    assert!((one.velocity.y - two.velocity.y).abs() < EPSILON);
}

#[test]
fn slow_drift_snaps_to_rest() {
    let mut v = Vehicle { velocity: Vec2::new(0.005, -0.005), ..Vehicle::default() };
    v.step(None, DT);
    assert_eq!(v.velocity, Vec2::ZERO);
}

#[test]
fn steering_needs_speed() {
    let mut v = Vehicle::default();
    v.step(Some(DriveIntent { steer: 1.0, ..DriveIntent::default() }), DT);
    assert_eq!(v.heading, 0.0);
}

#[test]
fn steering_right_decreases_heading_when_moving() {
    let mut v = Vehicle { velocity: Vec2::new(0.0, 20.0), ..Vehicle::default() };
    v.step(Some(DriveIntent { steer: 1.0, ..DriveIntent::default() }), DT);
    assert!((v.heading + VEHICLE_TURN_SPEED * DT).abs() < EPSILON);
}

#[test]
fn steering_is_scaled_down_at_low_speed() {
    let mut v = Vehicle { velocity: Vec2::new(0.0, 3.0), ..Vehicle::default() };
    v.step(Some(DriveIntent { steer: -1.0, ..DriveIntent::default() }), DT);
    let expected = VEHICLE_TURN_SPEED * DT * (3.0 / VEHICLE_FULL_TURN_SPEED);
    assert!((v.heading - expected).abs() < EPSILON);
}

#[test]
fn speed_is_capped() {
    let mut v = Vehicle { velocity: Vec2::new(0.0, 500.0), ..Vehicle::default() };
    v.step(None, DT);
    assert!(v.speed() <= VEHICLE_MAX_SPEED + EPSILON);
}

#[test]
fn position_is_clamped_to_boundary() {
    let mut v = Vehicle {
        position: Vec3::new(49.9, 0.0, -49.9),
        velocity: Vec2::new(40.0, -40.0),
        ..Vehicle::default()
    };
    v.step(None, 0.1);
    assert_eq!(v.position.x, VEHICLE_BOUNDARY);
    assert_eq!(v.position.z, -VEHICLE_BOUNDARY);
}

#[test]
fn unoccupied_car_coasts_without_updating_gauges() {
    let mut v = Vehicle { velocity: Vec2::new(0.0, 10.0), ..Vehicle::default() };
    v.step(None, DT);
    assert_eq!(v.heading, 0.0);
    assert_eq!(v.rpm, IDLE_RPM);
    assert!(v.position.z > VEHICLE_SPAWN.z);
}

// =============================================================
// Gauges
// =============================================================

#[test]
fn gauges_track_speed_while_driven() {
    let mut v = Vehicle { velocity: Vec2::new(0.0, 20.0), ..Vehicle::default() };
    v.step(Some(DriveIntent::default()), DT);
    assert_eq!(v.rpm, IDLE_RPM + 20.0 * RPM_PER_SPEED);
    assert_eq!(v.gear, 3);
}

#[test]
fn gear_for_speed_bands() {
    assert_eq!(gear_for_speed(0.0), 1);
    assert_eq!(gear_for_speed(7.9), 1);
    assert_eq!(gear_for_speed(8.0), 2);
    assert_eq!(gear_for_speed(31.9), 4);
    assert_eq!(gear_for_speed(40.0), TOP_GEAR);
    assert_eq!(gear_for_speed(1000.0), TOP_GEAR);
}
