//! First-person movement integrator.
//!
//! `position` is the player's feet; the eye sits `PLAYER_HEIGHT` above it on
//! foot, and exactly at the seat point while driving. Each frame the held
//! keys become a camera-relative target velocity, the horizontal velocity
//! blends toward it exponentially, gravity pulls down, and the result is
//! resolved against the staircase ramp, the floor of the current level and
//! the world boundary.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use glam::Vec3;

use crate::camera::Camera;
use crate::consts::{
    ACCEL_RATE, AIR_DECEL_RATE, BASE_SPEED, BASEMENT_CEILING_Y, BASEMENT_FLOOR_Y, DECEL_RATE, GRAVITY, GROUND_Y,
    HORIZONTAL_EPSILON, JUMP_IMPULSE, PLAYER_BOUNDARY, PLAYER_HEIGHT, PLAYER_SPAWN, SPRINT_MULTIPLIER,
    STAIRS_END_Z, STAIRS_HEIGHT, STAIRS_SNAP_TOLERANCE, STAIRS_START_Z, STAIRS_STEPS, STAIRS_WIDTH, STAIRS_X,
};
use crate::input::MoveIntent;
use crate::vehicle::VehicleTransform;

/// The on-foot player.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self { position: PLAYER_SPAWN, velocity: Vec3::ZERO, grounded: true }
    }
}

impl Player {
    /// Eye position for an on-foot camera.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * PLAYER_HEIGHT
    }

    /// Whether the player is below the basement ceiling.
    #[must_use]
    pub fn in_basement(&self) -> bool {
        self.position.y < BASEMENT_CEILING_Y
    }

    /// Advance one on-foot frame.
    pub fn step(&mut self, intent: MoveIntent, camera: &Camera, dt: f32) {
        let forward = camera.flat_forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();

        let speed = BASE_SPEED * if intent.sprint { SPRINT_MULTIPLIER } else { 1.0 };
        let desired = (forward * intent.forward + right * intent.right) * speed;

        let rate = if intent.has_input() {
            ACCEL_RATE
        } else if self.grounded {
            DECEL_RATE
        } else {
            AIR_DECEL_RATE
        };
        self.velocity.x = blend_axis(self.velocity.x, desired.x, rate, dt);
        self.velocity.z = blend_axis(self.velocity.z, desired.z, rate, dt);
        if self.velocity.x.abs() < HORIZONTAL_EPSILON {
            self.velocity.x = 0.0;
        }
        if self.velocity.z.abs() < HORIZONTAL_EPSILON {
            self.velocity.z = 0.0;
        }

        if intent.jump && self.grounded {
            self.velocity.y = JUMP_IMPULSE;
            self.grounded = false;
        }
        self.velocity.y += GRAVITY * dt;

        let next = self.position + self.velocity * dt;
        self.position.x = next.x.clamp(-PLAYER_BOUNDARY, PLAYER_BOUNDARY);
        self.position.z = next.z.clamp(-PLAYER_BOUNDARY, PLAYER_BOUNDARY);

        if let Some(ramp) = stair_height(self.position.x, self.position.z) {
            if (next.y - ramp).abs() < STAIRS_SNAP_TOLERANCE {
                self.land(ramp);
                return;
            }
        }

        let floor = if self.in_basement() { BASEMENT_FLOOR_Y } else { GROUND_Y };
        if next.y <= floor {
            self.land(floor);
        } else {
            self.position.y = next.y;
            self.grounded = false;
        }
    }

    /// Place the player in the driver's seat.
    pub fn seat_in(&mut self, car: &VehicleTransform) {
        self.position = car.seat_point();
        self.velocity = Vec3::ZERO;
        self.grounded = true;
    }

    /// Place the player beside the car, standing on the ground.
    pub fn exit_to(&mut self, car: &VehicleTransform) {
        let exit = car.exit_point();
        self.position = Vec3::new(exit.x, GROUND_Y, exit.z);
        self.velocity = Vec3::ZERO;
        self.grounded = true;
    }

    /// Drop all momentum, e.g. while input is paused.
    pub fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    fn land(&mut self, height: f32) {
        self.position.y = height;
        self.velocity.y = 0.0;
        self.grounded = true;
    }
}

/// Move `current` toward `target` by the fraction an exponential decay at
/// `rate` covers in `dt`. Negative rates are treated as zero.
#[must_use]
pub fn blend_axis(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let blend = 1.0 - (-rate.max(0.0) * dt).exp();
    current + (target - current) * blend
}

/// Feet height on the staircase ramp at (x, z), or `None` off the stair footprint.
///
/// The ramp rises linearly from the basement floor at the bottom step to the
/// ground at the top, lifted by half a step.
#[must_use]
pub fn stair_height(x: f32, z: f32) -> Option<f32> {
    let half_width = STAIRS_WIDTH * 0.5;
    let on_stairs =
        x > STAIRS_X - half_width && x < STAIRS_X + half_width && z < STAIRS_START_Z && z > STAIRS_END_Z;
    if !on_stairs {
        return None;
    }
    let progress = ((STAIRS_START_Z - z) / (STAIRS_START_Z - STAIRS_END_Z)).clamp(0.0, 1.0);
    let step = STAIRS_HEIGHT / STAIRS_STEPS;
    Some(BASEMENT_FLOOR_Y + progress * STAIRS_HEIGHT + step * 0.5)
}
