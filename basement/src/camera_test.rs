#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f32 = 1e-5;

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

// --- Orientation ---

#[test]
fn default_camera_looks_down_negative_z() {
    let cam = Camera::default();
    assert!(vec_approx_eq(cam.forward(), Vec3::new(0.0, 0.0, -1.0)));
    assert!(vec_approx_eq(cam.right(), Vec3::X));
    assert!(vec_approx_eq(cam.up(), Vec3::Y));
}

#[test]
fn default_camera_sits_at_eye_height_above_spawn() {
    let cam = Camera::default();
    assert!((cam.position.y - (PLAYER_SPAWN.y + PLAYER_HEIGHT)).abs() < EPSILON);
}

#[test]
fn quarter_turn_left_looks_down_negative_x() {
    let cam = Camera { yaw: std::f32::consts::FRAC_PI_2, ..Camera::default() };
    assert!(vec_approx_eq(cam.forward(), Vec3::new(-1.0, 0.0, 0.0)));
    assert!(vec_approx_eq(cam.right(), Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn flat_forward_ignores_pitch() {
    let cam = Camera { pitch: 0.8, ..Camera::default() };
    let flat = cam.flat_forward();
    assert_eq!(flat.y, 0.0);
    assert!((flat.length() - 1.0).abs() < EPSILON);
    assert!(vec_approx_eq(flat, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn basis_is_orthonormal_when_pitched() {
    let cam = Camera { yaw: 0.7, pitch: -0.4, ..Camera::default() };
    let (f, r, u) = (cam.forward(), cam.right(), cam.up());
    assert!(f.dot(r).abs() < EPSILON);
    assert!(f.dot(u).abs() < EPSILON);
    assert!(r.dot(u).abs() < EPSILON);
    assert!((u.length() - 1.0).abs() < EPSILON);
}

// --- Look ---

#[test]
fn look_right_turns_clockwise() {
    let mut cam = Camera::default();
    cam.look(100.0, 0.0);
    assert!(cam.yaw < 0.0);
    assert!(cam.forward().x > 0.0);
}

#[test]
fn look_down_lowers_pitch() {
    let mut cam = Camera::default();
    cam.look(0.0, 50.0);
    assert!(cam.pitch < 0.0);
}

#[test]
fn pitch_is_clamped() {
    let mut cam = Camera::default();
    cam.look(0.0, -1_000_000.0);
    assert_eq!(cam.pitch, PITCH_LIMIT);
    cam.look(0.0, 1_000_000.0);
    assert_eq!(cam.pitch, -PITCH_LIMIT);
}

// --- Projection ---

#[test]
fn point_ahead_projects_to_centre() {
    let cam = Camera { position: Vec3::ZERO, ..Camera::default() };
    let p = cam.project(Vec3::new(0.0, 0.0, -10.0), 800.0, 600.0);
    let p = p.unwrap();
    assert!((p.x - 400.0).abs() < 1e-6);
    assert!((p.y - 300.0).abs() < 1e-6);
}

#[test]
fn point_behind_does_not_project() {
    let cam = Camera { position: Vec3::ZERO, ..Camera::default() };
    assert!(cam.project(Vec3::new(0.0, 0.0, 10.0), 800.0, 600.0).is_none());
}

#[test]
fn point_up_and_right_lands_in_upper_right_quadrant() {
    let cam = Camera { position: Vec3::ZERO, ..Camera::default() };
    let p = cam.project(Vec3::new(1.0, 1.0, -5.0), 800.0, 600.0).unwrap();
    assert!(p.x > 400.0);
    assert!(p.y < 300.0);
}

#[test]
fn to_view_reports_depth_along_forward() {
    let cam = Camera { position: Vec3::new(1.0, 2.0, 3.0), ..Camera::default() };
    let v = cam.to_view(Vec3::new(1.0, 2.0, -2.0));
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 5.0)));
}

// --- Near-plane clipping ---

#[test]
fn clip_keeps_polygon_in_front() {
    let cam = Camera::default();
    let quad = [
        Vec3::new(-1.0, -1.0, 5.0),
        Vec3::new(1.0, -1.0, 5.0),
        Vec3::new(1.0, 1.0, 5.0),
        Vec3::new(-1.0, 1.0, 5.0),
    ];
    assert_eq!(cam.clip_near(&quad), quad.to_vec());
}

#[test]
fn clip_drops_polygon_behind() {
    let cam = Camera::default();
    let quad = [
        Vec3::new(-1.0, -1.0, -5.0),
        Vec3::new(1.0, -1.0, -5.0),
        Vec3::new(1.0, 1.0, -5.0),
    ];
    assert!(cam.clip_near(&quad).is_empty());
}

#[test]
fn clip_straddling_polygon_lands_on_near_plane() {
    let cam = Camera::default();
    // A floor quad running from behind the eye to well ahead of it.
    let quad = [
        Vec3::new(-1.0, -1.0, -2.0),
        Vec3::new(1.0, -1.0, -2.0),
        Vec3::new(1.0, -1.0, 8.0),
        Vec3::new(-1.0, -1.0, 8.0),
    ];
    let clipped = cam.clip_near(&quad);
    assert_eq!(clipped.len(), 4);
    assert!(clipped.iter().all(|v| v.z >= cam.near - EPSILON));
    assert_eq!(clipped.iter().filter(|v| (v.z - cam.near).abs() < EPSILON).count(), 2);
}

#[test]
fn clip_single_corner_in_front_gives_triangle() {
    let cam = Camera::default();
    let tri = [
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(1.0, 0.0, -4.0),
        Vec3::new(-1.0, 0.0, -4.0),
    ];
    assert_eq!(cam.clip_near(&tri).len(), 3);
}
