//! HUD model: counters, crosshair geometry and the minimap's world-to-canvas
//! mapping. Pure data; [`crate::render`] does the painting.

#[cfg(test)]
#[path = "hud_test.rs"]
mod hud_test;

use glam::Vec3;

use crate::camera::Point;
use crate::consts::{
    CROSSHAIR_GAP, CROSSHAIR_SIZE, CROSSHAIR_THICKNESS, HEALTH_BAR_WIDTH, MINIMAP_MARGIN, MINIMAP_PADDING,
    MINIMAP_SIZE, PLAYER_BOUNDARY,
};

/// Half-extent of the basement footprint drawn on the minimap.
const BASEMENT_HALF_EXTENT: f32 = 6.0;

/// Flavor counters shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStats {
    pub health: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub money: u32,
}

impl Default for HudStats {
    fn default() -> Self {
        Self { health: 100, ammo: 30, max_ammo: 30, money: 0 }
    }
}

impl HudStats {
    #[must_use]
    pub fn ammo_label(&self) -> String {
        format!("{} / {}", self.ammo, self.max_ammo)
    }

    #[must_use]
    pub fn money_label(&self) -> String {
        format!("${}", self.money)
    }

    #[must_use]
    pub fn health_label(&self) -> String {
        format!("HP: {}", self.health)
    }
}

/// Gear and engine speed readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauges {
    pub gear: u8,
    pub rpm: f32,
}

impl Gauges {
    #[must_use]
    pub fn label(&self) -> String {
        format!("GEAR {}  {:>4.0} RPM", self.gear, self.rpm)
    }
}

/// Snapshot of everything the HUD overlay paints for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView {
    pub stats: HudStats,
    /// Present only while driving.
    pub gauges: Option<Gauges>,
    pub player: Vec3,
    pub vehicle: Vec3,
    pub npc: Vec3,
}

/// Health bar fill colour: green when healthy, amber when hurt, red when critical.
#[must_use]
pub fn health_color(health: u32) -> &'static str {
    if health > 50 {
        "#00ff00"
    } else if health > 25 {
        "#ffaa00"
    } else {
        "#ff0000"
    }
}

/// Width of the health bar fill in pixels.
#[must_use]
pub fn health_bar_width(health: u32) -> f64 {
    f64::from(health.min(100)) / 100.0 * HEALTH_BAR_WIDTH
}

/// An axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// The four crosshair arms around `center`: left, right, top, bottom.
#[must_use]
pub fn crosshair_rects(center: Point) -> [Rect; 4] {
    let half = CROSSHAIR_THICKNESS / 2.0;
    [
        Rect { x: center.x - CROSSHAIR_SIZE - CROSSHAIR_GAP, y: center.y - half, w: CROSSHAIR_SIZE, h: CROSSHAIR_THICKNESS },
        Rect { x: center.x + CROSSHAIR_GAP, y: center.y - half, w: CROSSHAIR_SIZE, h: CROSSHAIR_THICKNESS },
        Rect { x: center.x - half, y: center.y - CROSSHAIR_SIZE - CROSSHAIR_GAP, w: CROSSHAIR_THICKNESS, h: CROSSHAIR_SIZE },
        Rect { x: center.x - half, y: center.y + CROSSHAIR_GAP, w: CROSSHAIR_THICKNESS, h: CROSSHAIR_SIZE },
    ]
}

/// Kind of actor marker on the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Player,
    Vehicle,
    Npc,
}

impl MarkerKind {
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Player => "#ff0000",
            Self::Vehicle => "#0044ff",
            Self::Npc => "#2ecc71",
        }
    }
}

/// A marker already mapped to minimap pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub at: Point,
}

/// Minimap frame anchored to the top-right corner of the viewport.
///
/// The walkable world square maps onto the inner area (frame minus padding),
/// with world +X to the right and world -Z up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimap {
    pub frame: Rect,
}

impl Minimap {
    #[must_use]
    pub fn anchored(viewport_w: f64) -> Self {
        Self {
            frame: Rect {
                x: viewport_w - MINIMAP_SIZE - MINIMAP_MARGIN,
                y: MINIMAP_MARGIN,
                w: MINIMAP_SIZE,
                h: MINIMAP_SIZE,
            },
        }
    }

    /// The padded area the world is drawn into.
    #[must_use]
    pub fn inner(&self) -> Rect {
        Rect {
            x: self.frame.x + MINIMAP_PADDING,
            y: self.frame.y + MINIMAP_PADDING,
            w: self.frame.w - MINIMAP_PADDING * 2.0,
            h: self.frame.h - MINIMAP_PADDING * 2.0,
        }
    }

    /// Map a world ground position to minimap pixels, clamped to the inner area.
    #[must_use]
    pub fn world_to_map(&self, x: f32, z: f32) -> Point {
        let inner = self.inner();
        let span = f64::from(PLAYER_BOUNDARY) * 2.0;
        let u = ((f64::from(x) + f64::from(PLAYER_BOUNDARY)) / span).clamp(0.0, 1.0);
        let v = ((f64::from(z) + f64::from(PLAYER_BOUNDARY)) / span).clamp(0.0, 1.0);
        Point::new(inner.x + u * inner.w, inner.y + v * inner.h)
    }

    /// The basement footprint in minimap pixels.
    #[must_use]
    pub fn basement_outline(&self) -> Rect {
        let tl = self.world_to_map(-BASEMENT_HALF_EXTENT, -BASEMENT_HALF_EXTENT);
        let br = self.world_to_map(BASEMENT_HALF_EXTENT, BASEMENT_HALF_EXTENT);
        Rect { x: tl.x, y: tl.y, w: br.x - tl.x, h: br.y - tl.y }
    }

    /// Markers for every actor; the player is last so it paints on top.
    #[must_use]
    pub fn markers(&self, player: Vec3, vehicle: Vec3, npc: Vec3) -> [Marker; 3] {
        [
            Marker { kind: MarkerKind::Npc, at: self.world_to_map(npc.x, npc.z) },
            Marker { kind: MarkerKind::Vehicle, at: self.world_to_map(vehicle.x, vehicle.z) },
            Marker { kind: MarkerKind::Player, at: self.world_to_map(player.x, player.z) },
        ]
    }
}
