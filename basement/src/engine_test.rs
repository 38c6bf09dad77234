#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{NPC_ANCHOR, PLAYER_BOUNDARY, PLAYER_HEIGHT, VEHICLE_SPAWN};

const DT: f64 = 1.0 / 60.0;

// =============================================================
// Helpers
// =============================================================

fn core_near_car() -> EngineCore {
    let mut core = EngineCore::new();
    core.player.position = VEHICLE_SPAWN + Vec3::new(2.0, 0.0, 0.0);
    core.player.velocity = Vec3::ZERO;
    core
}

fn core_on_ground(at: Vec3) -> EngineCore {
    let mut core = EngineCore::new();
    core.player.position = at;
    core.player.grounded = true;
    core
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_core_starts_in_basement_on_foot() {
    let core = EngineCore::new();
    assert!(!core.in_car);
    assert!(!core.paused);
    assert!(core.player.in_basement());
    assert_eq!(core.stats, HudStats::default());
    assert_eq!(core.hint, None);
    assert!(!core.scene.solids.is_empty());
}

// =============================================================
// Movement
// =============================================================

#[test]
fn one_frame_forward_moves_along_flat_camera_forward() {
    let mut core = core_on_ground(Vec3::new(20.0, 0.0, 20.0));
    core.camera.yaw = -0.9;
    core.camera.pitch = 0.3;
    let start = core.player.position;

    core.on_key_down(Key::Forward, false);
    core.tick(DT);

    let moved = core.player.position - start;
    assert!(moved.length() > 0.0);
    let dir = Vec3::new(moved.x, 0.0, moved.z).normalize();
    assert!((dir - core.camera.flat_forward()).length() < 1e-4);
}

#[test]
fn camera_follows_player_eye() {
    let mut core = core_on_ground(Vec3::new(20.0, 0.0, 20.0));
    core.tick(DT);
    assert_eq!(core.camera.position, core.player.position + Vec3::Y * PLAYER_HEIGHT);
}

#[test]
fn sustained_movement_stays_inside_boundary() {
    let mut core = core_on_ground(Vec3::new(55.0, 0.0, 0.0));
    core.camera.yaw = -std::f32::consts::FRAC_PI_2;
    core.on_key_down(Key::Forward, false);
    core.on_key_down(Key::Sprint, false);
    for _ in 0..300 {
        core.tick(DT);
        assert!(core.player.position.x <= PLAYER_BOUNDARY);
    }
    assert_eq!(core.player.position.x, PLAYER_BOUNDARY);
}

#[test]
fn key_up_stops_input() {
    let mut core = core_on_ground(Vec3::new(20.0, 0.0, 20.0));
    core.on_key_down(Key::Forward, false);
    core.on_key_up(Key::Forward);
    assert!(core.keys.is_idle());
}

#[test]
fn huge_frame_delta_is_clamped() {
    let mut one = core_on_ground(Vec3::new(20.0, 0.0, 20.0));
    let mut two = core_on_ground(Vec3::new(20.0, 0.0, 20.0));
    one.on_key_down(Key::Forward, false);
    two.on_key_down(Key::Forward, false);
    one.tick(5.0);
    two.tick(f64::from(MAX_FRAME_DT));
    assert_eq!(one.player.position, two.player.position);
}

#[test]
fn clear_input_drops_held_keys() {
    let mut core = EngineCore::new();
    core.on_key_down(Key::Forward, false);
    core.on_key_down(Key::Left, false);
    core.clear_input();
    assert!(core.keys.is_idle());
}

#[test]
fn look_turns_camera() {
    let mut core = EngineCore::new();
    core.on_look(100.0, 0.0);
    assert!(core.camera.yaw < 0.0);
}

// =============================================================
// Pause
// =============================================================

#[test]
fn pausing_releases_pointer_and_clears_keys() {
    let mut core = core_on_ground(Vec3::new(20.0, 0.0, 20.0));
    core.on_key_down(Key::Forward, false);
    core.player.velocity = Vec3::new(3.0, 0.0, 0.0);

    let actions = core.set_paused(true);

    assert!(actions.contains(&Action::ReleasePointer));
    assert!(actions.contains(&Action::HintChanged(Some(Hint::Paused))));
    assert!(core.keys.is_idle());
    assert_eq!(core.player.velocity, Vec3::ZERO);
}

#[test]
fn paused_ignores_keys_and_look() {
    let mut core = EngineCore::new();
    core.set_paused(true);
    core.on_key_down(Key::Forward, false);
    core.on_look(100.0, 100.0);
    assert!(core.keys.is_idle());
    assert_eq!(core.camera.yaw, 0.0);
}

#[test]
fn paused_frame_does_not_move_player() {
    let mut core = core_on_ground(Vec3::new(20.0, 0.0, 20.0));
    core.set_paused(true);
    let start = core.player.position;
    core.tick(DT);
    assert_eq!(core.player.position, start);
}

#[test]
fn unpausing_restores_hint() {
    let mut core = EngineCore::new();
    core.set_paused(true);
    let actions = core.set_paused(false);
    assert_eq!(actions, vec![Action::HintChanged(None)]);
    assert!(!core.paused);
}

#[test]
fn repeated_pause_is_a_no_op() {
    let mut core = EngineCore::new();
    core.set_paused(true);
    assert!(core.set_paused(true).is_empty());
}

#[test]
fn map_keys_are_left_to_host() {
    let mut core = EngineCore::new();
    assert!(core.on_key_down(Key::ToggleMap, false).is_empty());
    assert!(core.on_key_down(Key::Escape, false).is_empty());
    assert!(!core.paused);
}

// =============================================================
// Vehicle
// =============================================================

#[test]
fn interact_near_car_enters_it() {
    let mut core = core_near_car();
    let actions = core.on_key_down(Key::Interact, false);
    assert!(core.in_car);
    assert!(actions.contains(&Action::VehicleChanged(true)));
    assert!(actions.contains(&Action::HintChanged(Some(Hint::ExitVehicle))));
    assert_eq!(core.player.position, core.vehicle.transform().seat_point());
}

#[test]
fn interact_in_car_exits_at_fixed_offset() {
    let mut core = core_near_car();
    core.on_key_down(Key::Interact, false);
    core.on_key_down(Key::Interact, false);
    assert!(!core.in_car);
    let exit = core.vehicle.transform().exit_point();
    assert_eq!(core.player.position, Vec3::new(exit.x, 0.0, exit.z));
    assert_eq!(core.player.velocity, Vec3::ZERO);
}

#[test]
fn toggling_twice_returns_vehicle_changed_both_ways() {
    let mut core = core_near_car();
    let enter = core.on_key_down(Key::Interact, false);
    let exit = core.on_key_down(Key::Interact, false);
    assert!(enter.contains(&Action::VehicleChanged(true)));
    assert!(exit.contains(&Action::VehicleChanged(false)));
}

#[test]
fn auto_repeat_does_not_toggle() {
    let mut core = core_near_car();
    core.on_key_down(Key::Interact, false);
    let actions = core.on_key_down(Key::Interact, true);
    assert!(core.in_car);
    assert!(actions.is_empty());
}

#[test]
fn interact_far_from_everything_does_nothing() {
    let mut core = core_on_ground(Vec3::new(40.0, 0.0, -40.0));
    core.tick(DT);
    let actions = core.on_key_down(Key::Interact, false);
    assert!(actions.is_empty());
    assert!(!core.in_car);
}

#[test]
fn driving_moves_car_and_keeps_player_seated() {
    let mut core = core_near_car();
    core.on_key_down(Key::Interact, false);
    core.on_key_down(Key::Forward, false);
    for _ in 0..30 {
        core.tick(DT);
    }
    assert!(core.vehicle.position.z > VEHICLE_SPAWN.z);
    assert_eq!(core.player.position, core.vehicle.transform().seat_point());
    assert_eq!(core.camera.position, core.player.position);
}

#[test]
fn walking_does_not_drive_car() {
    let mut core = core_near_car();
    core.on_key_down(Key::Forward, false);
    for _ in 0..30 {
        core.tick(DT);
    }
    assert_eq!(core.vehicle.position, VEHICLE_SPAWN);
}

// =============================================================
// NPC
// =============================================================

#[test]
fn approaching_npc_awards_money_once() {
    let mut core = core_on_ground(NPC_ANCHOR + Vec3::new(1.0, 0.4, 0.0));
    let actions = core.tick(DT);
    assert!(actions.contains(&Action::MoneyChanged(100)));
    assert!(actions.contains(&Action::HintChanged(Some(Hint::Talk))));

    let actions = core.tick(DT);
    assert!(!actions.iter().any(|a| matches!(a, Action::MoneyChanged(_))));
    assert_eq!(core.stats.money, 100);
}

#[test]
fn talking_to_npc_awards_money() {
    let mut core = core_on_ground(NPC_ANCHOR + Vec3::new(1.0, 0.4, 0.0));
    core.tick(DT);
    let actions = core.on_key_down(Key::Interact, false);
    assert_eq!(actions, vec![Action::MoneyChanged(200)]);
    assert_eq!(core.stats().money, 200);
}

// =============================================================
// HUD view
// =============================================================

#[test]
fn hud_view_on_foot_has_no_gauges() {
    let core = EngineCore::new();
    let view = core.hud_view();
    assert_eq!(view.stats, core.stats);
    assert_eq!(view.gauges, None);
    assert_eq!(view.player, core.player.position);
    assert_eq!(view.vehicle, core.vehicle.position);
    assert_eq!(view.npc, core.npc.position());
}

#[test]
fn hud_view_shows_gauges_while_driving() {
    let mut core = core_near_car();
    core.on_key_down(Key::Interact, false);
    assert!(core.in_car);
    core.vehicle.gear = 3;
    core.vehicle.rpm = 2400.0;
    let view = core.hud_view();
    assert_eq!(view.gauges, Some(Gauges { gear: 3, rpm: 2400.0 }));
}

#[test]
fn hud_view_tracks_money() {
    let mut core = core_on_ground(NPC_ANCHOR + Vec3::new(1.0, 0.4, 0.0));
    core.tick(DT);
    assert_eq!(core.hud_view().stats.money, 100);
}
