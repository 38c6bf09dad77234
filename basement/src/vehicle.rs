//! Drivable car: a kinematic model with throttle, speed-coupled steering and
//! exponential friction.
//!
//! Heading 0 faces +Z. Velocity is tracked on the ground plane only; the car
//! never leaves `GROUND_Y`.

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

use glam::{Vec2, Vec3};

use crate::consts::{
    EXIT_OFFSET, FRICTION_REFERENCE_HZ, GEAR_SPAN, IDLE_RPM, RPM_PER_SPEED, SEAT_OFFSET, TOP_GEAR, VEHICLE_ACCEL,
    VEHICLE_BOUNDARY, VEHICLE_FRICTION, VEHICLE_FULL_TURN_SPEED, VEHICLE_HANDBRAKE, VEHICLE_MAX_SPEED,
    VEHICLE_SPAWN, VEHICLE_STOP_EPSILON, VEHICLE_TURN_GATE, VEHICLE_TURN_SPEED,
};
use crate::input::DriveIntent;

/// Position and heading of the car, as read by the player, HUD and renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleTransform {
    pub position: Vec3,
    pub heading: f32,
}

impl VehicleTransform {
    /// Convert a car-space offset to world space. Only x/z rotate with the heading.
    #[must_use]
    pub fn to_world(&self, offset: Vec3) -> Vec3 {
        self.position + rotate_offset(offset, self.heading)
    }

    /// Where the driver's eye sits.
    #[must_use]
    pub fn seat_point(&self) -> Vec3 {
        self.to_world(SEAT_OFFSET)
    }

    /// Where the player stands after getting out.
    #[must_use]
    pub fn exit_point(&self) -> Vec3 {
        self.to_world(EXIT_OFFSET)
    }

    /// Unit vector the car's nose points along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (s, c) = self.heading.sin_cos();
        Vec3::new(s, 0.0, c)
    }
}

/// Rotate a car-space offset about +Y by `heading`.
#[must_use]
pub fn rotate_offset(offset: Vec3, heading: f32) -> Vec3 {
    let (s, c) = heading.sin_cos();
    Vec3::new(offset.x * c + offset.z * s, offset.y, offset.z * c - offset.x * s)
}

/// The drivable car.
#[derive(Debug, Clone, Copy)]
pub struct Vehicle {
    pub position: Vec3,
    pub heading: f32,
    /// Ground-plane velocity: `x` along world X, `y` along world Z.
    pub velocity: Vec2,
    pub rpm: f32,
    pub gear: u8,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            position: VEHICLE_SPAWN,
            heading: 0.0,
            velocity: Vec2::ZERO,
            rpm: IDLE_RPM,
            gear: 1,
        }
    }
}

impl Vehicle {
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[must_use]
    pub fn transform(&self) -> VehicleTransform {
        VehicleTransform { position: self.position, heading: self.heading }
    }

    /// Advance one frame. `intent` is `Some` only while the player is driving;
    /// an empty car still coasts to a stop.
    pub fn step(&mut self, intent: Option<DriveIntent>, dt: f32) {
        let controls = intent.unwrap_or_default();

        if intent.is_some() {
            self.update_gauges();
        }

        if controls.throttle != 0.0 {
            let (s, c) = self.heading.sin_cos();
            self.velocity += Vec2::new(s, c) * controls.throttle * VEHICLE_ACCEL * dt;
        }

        let speed = self.speed();
        if speed > VEHICLE_TURN_GATE {
            let coupling = (speed / VEHICLE_FULL_TURN_SPEED).min(1.0);
            self.heading -= controls.steer * VEHICLE_TURN_SPEED * dt * coupling;
        }

        let per_frame = if controls.handbrake { VEHICLE_HANDBRAKE } else { VEHICLE_FRICTION };
        self.velocity *= per_frame.powf(dt * FRICTION_REFERENCE_HZ);

        if self.velocity.x.abs() < VEHICLE_STOP_EPSILON {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < VEHICLE_STOP_EPSILON {
            self.velocity.y = 0.0;
        }

        let speed = self.speed();
        if speed > VEHICLE_MAX_SPEED {
            self.velocity *= VEHICLE_MAX_SPEED / speed;
        }

        self.position.x = (self.position.x + self.velocity.x * dt).clamp(-VEHICLE_BOUNDARY, VEHICLE_BOUNDARY);
        self.position.z = (self.position.z + self.velocity.y * dt).clamp(-VEHICLE_BOUNDARY, VEHICLE_BOUNDARY);
    }

    fn update_gauges(&mut self) {
        let speed = self.speed();
        self.rpm = IDLE_RPM + speed * RPM_PER_SPEED;
        let gear = gear_for_speed(speed);
        if gear != self.gear && speed > VEHICLE_TURN_GATE {
            self.gear = gear;
        }
    }
}

/// Gear indicated for a given speed: 1 + one gear per `GEAR_SPAN`, capped at `TOP_GEAR`.
#[must_use]
pub fn gear_for_speed(speed: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let band = (speed.max(0.0) / GEAR_SPAN).floor().min(f32::from(TOP_GEAR)) as u8;
    (band + 1).min(TOP_GEAR)
}
