#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use glam::Vec3;

use crate::consts::{FOV_Y_DEG, LOOK_SENSITIVITY, NEAR_PLANE, PITCH_LIMIT, PLAYER_HEIGHT, PLAYER_SPAWN};

/// A point in screen space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// First-person camera.
///
/// `yaw` is measured from the -Z axis, positive turning left.
/// `pitch` is positive looking up and is clamped short of vertical.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y_deg: f32,
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: PLAYER_SPAWN + Vec3::Y * PLAYER_HEIGHT,
            yaw: 0.0,
            pitch: 0.0,
            fov_y_deg: FOV_Y_DEG,
            near: NEAR_PLANE,
        }
    }
}

impl Camera {
    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// View direction projected on the ground plane, or zero if degenerate.
    #[must_use]
    pub fn flat_forward(&self) -> Vec3 {
        let f = self.forward();
        Vec3::new(f.x, 0.0, f.z).normalize_or_zero()
    }

    /// Unit vector to the right of the view, always horizontal.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, -sy)
    }

    /// Unit vector up in view space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Apply a mouse movement delta in pixels.
    pub fn look(&mut self, dx: f64, dy: f64) {
        #[allow(clippy::cast_possible_truncation)]
        let (dx, dy) = (dx as f32, dy as f32);
        self.yaw -= dx * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - dy * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Convert a world-space point to view space: x right, y up, z depth ahead.
    #[must_use]
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        let d = world - self.position;
        Vec3::new(d.dot(self.right()), d.dot(self.up()), d.dot(self.forward()))
    }

    /// Project a view-space point to screen coordinates for a `w` x `h` viewport.
    ///
    /// Returns `None` for points on or behind the near plane.
    #[must_use]
    pub fn project_view(&self, view: Vec3, w: f64, h: f64) -> Option<Point> {
        if view.z < self.near {
            return None;
        }
        let focal = 1.0 / (f64::from(self.fov_y_deg).to_radians() * 0.5).tan();
        let half_h = h * 0.5;
        let z = f64::from(view.z);
        Some(Point {
            x: w * 0.5 + f64::from(view.x) / z * focal * half_h,
            y: half_h - f64::from(view.y) / z * focal * half_h,
        })
    }

    /// Project a world-space point straight to the screen.
    #[must_use]
    pub fn project(&self, world: Vec3, w: f64, h: f64) -> Option<Point> {
        self.project_view(self.to_view(world), w, h)
    }

    /// Clip a convex view-space polygon to the near plane.
    ///
    /// Returns the part of the polygon at depth `>= near`; fewer than three
    /// vertices means nothing is left to draw.
    #[must_use]
    pub fn clip_near(&self, polygon: &[Vec3]) -> Vec<Vec3> {
        let near = self.near;
        let mut out = Vec::with_capacity(polygon.len() + 1);
        for (i, &current) in polygon.iter().enumerate() {
            let next = polygon[(i + 1) % polygon.len()];
            let current_in = current.z >= near;
            let next_in = next.z >= near;
            if current_in {
                out.push(current);
            }
            if current_in != next_in {
                let t = (near - current.z) / (next.z - current.z);
                out.push(current.lerp(next, t));
            }
        }
        out
    }
}
