//! Scene graph: every visible thing in the sandbox is an oriented box.
//!
//! DESIGN
//! ======
//! The static world is built once by [`SceneGraph::world`]. The car and the
//! NPC move, so their parts are rebuilt each frame from their transforms by
//! [`vehicle_solids`] and [`npc_solids`]. The renderer only ever sees
//! [`Solid`]s and the [`Face`]s they expand into.
//!
//! Solids are tagged with a [`Zone`] so the basement is hidden while the
//! player is outdoors and vice versa, and with a [`Layer`] so large room
//! shells are painted before the furniture inside them.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use glam::Vec3;

use crate::consts::{
    BASEMENT_FLOOR_Y, GROUND_Y, STAIRS_END_Z, STAIRS_HEIGHT, STAIRS_START_Z, STAIRS_STEPS, STAIRS_WIDTH, STAIRS_X,
};
use crate::vehicle::{VehicleTransform, rotate_offset};

/// Direction light arrives from, used for flat face shading.
const LIGHT_DIR: Vec3 = Vec3::new(0.35, 0.85, 0.4);

/// Brightness of a face turned fully away from the light.
const AMBIENT: f32 = 0.55;

/// Centre height of the basement floor slab.
const INTERIOR_Y: f32 = BASEMENT_FLOOR_Y - 0.1;

/// Lift applied to NPC parts so the shoes touch the floor.
const NPC_FOOT_LIFT: f32 = 0.85;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hex(value: u32) -> Self {
        Self { r: ((value >> 16) & 0xff) as u8, g: ((value >> 8) & 0xff) as u8, b: (value & 0xff) as u8 }
    }

    /// Scale every channel by `factor`, saturating at the channel limits.
    #[must_use]
    pub fn shade(self, factor: f32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scale = |c: u8| (f32::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self { r: scale(self.r), g: scale(self.g), b: scale(self.b) }
    }

    /// CSS colour string.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Which part of the world a solid belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Basement,
    Outdoor,
    /// Visible from both sides of the ceiling (the stairs).
    Everywhere,
}

impl Zone {
    /// The zone a point at height `y` is in.
    #[must_use]
    pub fn containing(y: f32) -> Self {
        if y < GROUND_Y { Self::Basement } else { Self::Outdoor }
    }

    /// Whether a solid in `self` is drawn from `viewer`.
    #[must_use]
    pub fn visible_from(self, viewer: Zone) -> bool {
        self == Self::Everywhere || self == viewer
    }
}

/// Paint order bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Ground, floors, walls and ceilings: painted first.
    Backdrop,
    /// Everything else, depth sorted.
    Body,
}

/// An oriented box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub center: Vec3,
    pub size: Vec3,
    /// Rotation about +Y, same convention as the car heading.
    pub yaw: f32,
    pub color: Rgb,
    pub layer: Layer,
    pub zone: Zone,
}

/// One side of a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub corners: [Vec3; 4],
    pub normal: Vec3,
    pub color: Rgb,
}

impl Face {
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        (self.corners[0] + self.corners[1] + self.corners[2] + self.corners[3]) * 0.25
    }

    /// Whether the face points toward `eye`.
    #[must_use]
    pub fn faces_toward(&self, eye: Vec3) -> bool {
        self.normal.dot(eye - self.corners[0]) > 0.0
    }
}

impl Solid {
    /// The six faces with outward normals and light-shaded colours.
    #[must_use]
    pub fn faces(&self) -> [Face; 6] {
        let h = self.size * 0.5;
        let corner = |x: f32, y: f32, z: f32| self.center + rotate_offset(Vec3::new(x * h.x, y * h.y, z * h.z), self.yaw);
        let axis = |v: Vec3| rotate_offset(v, self.yaw);
        let face = |corners: [Vec3; 4], normal: Vec3| Face { corners, normal, color: self.color.shade(shade_factor(normal)) };

        [
            face([corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, 1.0, 1.0), corner(-1.0, 1.0, 1.0)], Vec3::Y),
            face(
                [corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0, 1.0), corner(1.0, -1.0, 1.0), corner(1.0, -1.0, -1.0)],
                Vec3::NEG_Y,
            ),
            face([corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, 1.0, -1.0)], axis(Vec3::X)),
            face(
                [corner(-1.0, -1.0, -1.0), corner(-1.0, 1.0, -1.0), corner(-1.0, 1.0, 1.0), corner(-1.0, -1.0, 1.0)],
                axis(Vec3::NEG_X),
            ),
            face([corner(-1.0, -1.0, 1.0), corner(-1.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, -1.0, 1.0)], axis(Vec3::Z)),
            face(
                [corner(-1.0, -1.0, -1.0), corner(1.0, -1.0, -1.0), corner(1.0, 1.0, -1.0), corner(-1.0, 1.0, -1.0)],
                axis(Vec3::NEG_Z),
            ),
        ]
    }
}

/// Brightness multiplier for a face with the given outward normal.
#[must_use]
pub fn shade_factor(normal: Vec3) -> f32 {
    let lit = normal.dot(LIGHT_DIR.normalize()).max(0.0);
    AMBIENT + (1.0 - AMBIENT) * lit
}

// =============================================================
// Builder
// =============================================================

/// Accumulates solids that share a zone, a layer and an origin.
struct Builder<'a> {
    out: &'a mut Vec<Solid>,
    origin: Vec3,
    yaw: f32,
    zone: Zone,
    layer: Layer,
}

impl Builder<'_> {
    fn add(&mut self, center: [f32; 3], size: [f32; 3], color: u32) -> &mut Self {
        self.add_turned(center, size, 0.0, color)
    }

    fn add_turned(&mut self, center: [f32; 3], size: [f32; 3], yaw: f32, color: u32) -> &mut Self {
        self.out.push(Solid {
            center: self.origin + rotate_offset(Vec3::from(center), self.yaw),
            size: Vec3::from(size),
            yaw: self.yaw + yaw,
            color: Rgb::hex(color),
            layer: self.layer,
            zone: self.zone,
        });
        self
    }

    fn layer(&mut self, layer: Layer) -> &mut Self {
        self.layer = layer;
        self
    }
}

fn builder(out: &mut Vec<Solid>, origin: Vec3, zone: Zone) -> Builder<'_> {
    Builder { out, origin, yaw: 0.0, zone, layer: Layer::Body }
}

// =============================================================
// Static world
// =============================================================

/// The static environment.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    pub solids: Vec<Solid>,
}

impl SceneGraph {
    /// Build the full sandbox: basement, stairs, ground, drift track and houses.
    #[must_use]
    pub fn world() -> Self {
        let mut solids = Vec::new();
        basement_interior(&mut solids);
        staircase(&mut solids);
        outdoor_ground(&mut solids);
        drift_track(&mut solids);
        neighborhood(&mut solids);
        Self { solids }
    }

    /// Solids drawn for a viewer in `zone`.
    pub fn visible(&self, zone: Zone) -> impl Iterator<Item = &Solid> {
        self.solids.iter().filter(move |s| s.zone.visible_from(zone))
    }
}

fn basement_interior(out: &mut Vec<Solid>) {
    let mut b = builder(out, Vec3::new(0.0, INTERIOR_Y, 0.0), Zone::Basement);

    // Shell.
    b.layer(Layer::Backdrop)
        .add([0.0, 0.0, 0.0], [12.0, 0.2, 12.0], 0x8b_3a3a)
        .add([0.0, 2.0, -6.0], [12.0, 4.0, 0.2], 0xe8_d4a0)
        .add([0.0, 2.0, 6.0], [12.0, 4.0, 0.2], 0xe8_d4a0)
        .add([-6.0, 2.0, 0.0], [0.2, 4.0, 12.0], 0xe8_d4a0)
        .add([6.0, 2.0, 0.0], [0.2, 4.0, 12.0], 0xe8_d4a0);

    // Ceiling, leaving an opening over the stairs.
    let well_x0 = STAIRS_X - STAIRS_WIDTH * 0.5;
    let well_x1 = STAIRS_X + STAIRS_WIDTH * 0.5;
    for (x0, x1, z0, z1) in [
        (-6.0, well_x0, -6.0, 6.0),
        (well_x1, 6.0, -6.0, 6.0),
        (well_x0, well_x1, -6.0, STAIRS_END_Z),
        (well_x0, well_x1, STAIRS_START_Z, 6.0),
    ] {
        b.add([(x0 + x1) * 0.5, 4.0, (z0 + z1) * 0.5], [x1 - x0, 0.2, z1 - z0], 0xe8_e8d0);
    }

    // Window on the south wall.
    b.layer(Layer::Body)
        .add([0.0, 2.5, 5.95], [3.0, 2.0, 0.15], 0x87_ceeb)
        .add([0.0, 3.5, 5.9], [3.2, 0.1, 0.2], 0xf5_f5f5)
        .add([0.0, 1.5, 5.9], [3.2, 0.1, 0.2], 0xf5_f5f5)
        .add([-1.6, 2.5, 5.9], [0.1, 2.0, 0.2], 0xf5_f5f5)
        .add([1.6, 2.5, 5.9], [0.1, 2.0, 0.2], 0xf5_f5f5)
        .add([0.0, 3.2, 5.7], [0.3, 0.3, 0.3], 0x8b_4513);

    // Poster and shelf on the west wall.
    b.add([-5.85, 2.5, -2.0], [0.05, 2.5, 3.0], 0x2a_5a4a)
        .add([-5.75, 2.5, -2.5], [0.05, 1.5, 0.8], 0xd4_a574)
        .add([-5.75, 2.0, -1.5], [0.05, 1.0, 1.2], 0x4a_7a6a);

    // Desk, monitor and chair.
    b.add([-4.0, 0.8, -4.0], [2.0, 0.1, 1.2], 0x1a_1a1a)
        .add([-4.8, 0.4, -4.5], [0.1, 0.8, 0.1], 0x1a_1a1a)
        .add([-3.2, 0.4, -4.5], [0.1, 0.8, 0.1], 0x1a_1a1a)
        .add([-4.0, 1.5, -4.0], [0.05, 0.8, 1.2], 0x1a_1a1a)
        .add([-3.97, 1.5, -4.0], [0.02, 0.7, 1.1], 0x2a_4a8a)
        .add([-4.0, 2.1, -4.0], [0.3, 0.4, 0.3], 0xff_69b4)
        .add([-4.0, 0.5, -2.0], [0.8, 0.2, 0.8], 0x1a_1a1a)
        .add([-4.0, 1.2, -2.3], [0.7, 1.0, 0.1], 0x1a_1a1a);

    // Mini fridge, tall fridge, storage boxes.
    b.add([-5.0, 0.3, 4.0], [0.8, 0.6, 0.7], 0x2a_2a2a)
        .add([5.8, 1.25, 2.0], [0.2, 2.5, 1.2], 0xf5_f5f5)
        .add([5.7, 1.2, 2.4], [0.3, 0.1, 0.1], 0x88_8888)
        .add([-4.0, 0.4, 4.0], [0.6, 0.8, 0.4], 0xf5_f5dc)
        .add([-3.2, 0.4, 4.0], [0.6, 0.8, 0.4], 0xf5_f5dc);

    // Server stacks.
    for (x, z, height) in [(2.0, 3.0, 1.4), (0.0, 1.0, 1.0), (-2.0, 0.0, 0.8)] {
        b.add([x, height * 0.5, z], [0.6, height, 0.42], 0xfa_fafa);
    }
}

fn staircase(out: &mut Vec<Solid>) {
    let mut b = builder(out, Vec3::ZERO, Zone::Everywhere);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = STAIRS_STEPS as u32;
    let depth = (STAIRS_START_Z - STAIRS_END_Z) / STAIRS_STEPS;
    let rise = STAIRS_HEIGHT / STAIRS_STEPS;
    for i in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        let i = i as f32;
        let top = BASEMENT_FLOOR_Y + (i + 1.0) * rise;
        let z = STAIRS_START_Z - (i + 0.5) * depth;
        b.add([STAIRS_X, (BASEMENT_FLOOR_Y + top) * 0.5, z], [STAIRS_WIDTH, top - BASEMENT_FLOOR_Y, depth], 0x65_4321);
    }
}

fn outdoor_ground(out: &mut Vec<Solid>) {
    builder(out, Vec3::ZERO, Zone::Outdoor).layer(Layer::Backdrop).add([0.0, -0.05, 0.0], [200.0, 0.1, 200.0], 0x4a_7c4a);
}

fn drift_track(out: &mut Vec<Solid>) {
    let mut b = builder(out, Vec3::ZERO, Zone::Outdoor);
    let asphalt = 0x2a_2a2a;

    b.add([0.0, 0.01, 0.0], [8.0, 0.02, 40.0], asphalt).add([0.0, 0.01, 40.0], [8.0, 0.02, 40.0], asphalt);
    for i in 0..8_u8 {
        let angle = f32::from(i) / 8.0 * std::f32::consts::PI;
        let (s, c) = angle.sin_cos();
        b.add_turned([20.0 + c * 15.0, 0.01, 20.0 + s * 15.0], [8.0, 0.02, 8.0], angle, asphalt);
    }

    for i in 0..20_u8 {
        b.add([0.0, 0.03, f32::from(i) * 4.0 - 20.0], [0.3, 0.02, 2.0], 0xff_ff00);
    }
    for i in 0..40_u8 {
        b.add([5.0, 0.5, f32::from(i) * 2.0 - 20.0], [0.5, 1.0, 2.0], 0xff_0000);
    }
}

/// Roof treatment for a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Roof {
    Peaked,
    Flat,
    Chimney,
}

struct House {
    origin: [f32; 2],
    color: u32,
    size: [f32; 3],
    garage: bool,
    roof: Roof,
}

const HOUSES: [House; 8] = [
    House { origin: [-30.0, -30.0], color: 0xff_b6c1, size: [6.0, 4.0, 6.0], garage: true, roof: Roof::Peaked },
    House { origin: [-30.0, -15.0], color: 0x98_fb98, size: [5.0, 3.5, 7.0], garage: false, roof: Roof::Flat },
    House { origin: [-30.0, 0.0], color: 0xdd_a0dd, size: [7.0, 4.5, 6.0], garage: true, roof: Roof::Chimney },
    House { origin: [-15.0, -30.0], color: 0xf0_e68c, size: [5.5, 3.8, 5.5], garage: false, roof: Roof::Peaked },
    House { origin: [-15.0, 0.0], color: 0xff_e4b5, size: [6.5, 4.2, 7.0], garage: true, roof: Roof::Flat },
    House { origin: [30.0, -30.0], color: 0xb0_e0e6, size: [6.0, 4.0, 6.5], garage: false, roof: Roof::Chimney },
    House { origin: [30.0, -15.0], color: 0xff_dab9, size: [7.5, 4.8, 6.0], garage: true, roof: Roof::Peaked },
    House { origin: [30.0, 0.0], color: 0xe0_bbe4, size: [5.0, 3.5, 6.0], garage: false, roof: Roof::Flat },
];

const TREES: [[f32; 2]; 8] = [
    [-38.0, 12.0],
    [-22.0, 24.0],
    [18.0, -36.0],
    [36.0, 14.0],
    [-8.0, -34.0],
    [24.0, 32.0],
    [-36.0, -38.0],
    [12.0, -22.0],
];

fn neighborhood(out: &mut Vec<Solid>) {
    for house in &HOUSES {
        let [w, h, d] = house.size;
        let mut b = builder(out, Vec3::new(house.origin[0], GROUND_Y, house.origin[1]), Zone::Outdoor);
        b.add([0.0, h * 0.5, 0.0], [w, h, d], house.color)
            .add([0.0, 1.25, d * 0.5 + 0.1], [1.5, 2.5, 0.2], 0x65_4321)
            .add([-w * 0.3, h * 0.6, d * 0.5 + 0.1], [1.0, 1.0, 0.2], 0x87_ceeb)
            .add([w * 0.3, h * 0.6, d * 0.5 + 0.1], [1.0, 1.0, 0.2], 0x87_ceeb);

        match house.roof {
            Roof::Flat => {
                b.add([0.0, h + 0.15, 0.0], [w + 0.5, 0.3, d + 0.5], 0x65_4321);
            }
            Roof::Peaked | Roof::Chimney => {
                b.add([0.0, h + 0.5, 0.0], [w * 0.9, 1.0, d * 0.9], 0x8b_4513)
                    .add([0.0, h + 1.5, 0.0], [w * 0.55, 1.0, d * 0.55], 0x8b_4513)
                    .add([0.0, h + 2.4, 0.0], [w * 0.2, 0.8, d * 0.2], 0x8b_4513);
                if house.roof == Roof::Chimney {
                    b.add([w * 0.3, h + 2.0, 0.0], [0.8, 2.0, 0.8], 0x8b_0000);
                }
            }
        }

        if house.garage {
            b.add([w * 0.6, 1.25, 0.0], [3.0, 2.5, 4.0], house.color).add([w * 0.6, 1.0, 2.1], [2.5, 2.0, 0.2], 0x4a_4a4a);
        }
    }

    let mut roads = builder(out, Vec3::ZERO, Zone::Outdoor);
    roads.add([0.0, 0.02, -15.0], [100.0, 0.04, 4.0], 0x4a_4a4a).add([-15.0, 0.02, 0.0], [4.0, 0.04, 100.0], 0x4a_4a4a);

    for [x, z] in TREES {
        let mut b = builder(out, Vec3::new(x, GROUND_Y, z), Zone::Outdoor);
        b.add([0.0, 1.5, 0.0], [0.5, 3.0, 0.5], 0x8b_4513)
            .add([0.0, 3.6, 0.0], [2.8, 1.4, 2.8], 0x22_8b22)
            .add([0.0, 4.8, 0.0], [1.6, 1.2, 1.6], 0x22_8b22);
    }
}

// =============================================================
// Actors
// =============================================================

/// Body panels, glass and lights of the car at `transform`.
#[must_use]
pub fn vehicle_solids(transform: &VehicleTransform) -> Vec<Solid> {
    let mut out = Vec::new();
    let mut b = builder(&mut out, transform.position, Zone::containing(transform.position.y));
    b.yaw = transform.heading;

    let paint = 0x00_44ff;
    let glass = 0x88_ccff;
    b.add([0.0, 0.4, 0.0], [2.0, 0.8, 4.0], paint)
        .add([0.0, 1.0, -0.3], [1.8, 0.6, 2.0], paint)
        .add([0.0, 1.0, 0.7], [1.7, 0.5, 0.1], glass)
        .add([0.0, 1.0, -1.3], [1.7, 0.5, 0.1], glass)
        .add([0.9, 1.0, -0.3], [0.1, 0.4, 1.5], glass)
        .add([-0.9, 1.0, -0.3], [0.1, 0.4, 1.5], glass)
        .add([0.0, 1.2, -2.0], [1.8, 0.1, 0.4], paint)
        .add([-0.6, 0.4, 2.0], [0.3, 0.2, 0.1], 0xff_ff99)
        .add([0.6, 0.4, 2.0], [0.3, 0.2, 0.1], 0xff_ff99)
        .add([-0.7, 0.4, -2.0], [0.3, 0.2, 0.1], 0xff_0000)
        .add([0.7, 0.4, -2.0], [0.3, 0.2, 0.1], 0xff_0000);
    for (x, z) in [(-0.9, 1.2), (0.9, 1.2), (-0.9, -1.2), (0.9, -1.2)] {
        b.add([x, 0.3, z], [0.3, 0.6, 0.6], 0x1a_1a1a);
    }
    out
}

/// The NPC's body parts with feet at `position`.
#[must_use]
pub fn npc_solids(position: Vec3) -> Vec<Solid> {
    let mut out = Vec::new();
    let mut b = builder(&mut out, position + Vec3::Y * NPC_FOOT_LIFT, Zone::containing(position.y));
    let skin = 0xff_d4a3;
    let hair = 0xf5_f5dc;
    b.add([0.0, 0.6, 0.0], [0.5, 1.2, 0.35], 0x00_0000)
        .add([0.0, 1.5, 0.0], [0.45, 0.5, 0.45], skin)
        .add([0.0, 1.65, 0.0], [0.32, 0.25, 0.32], hair)
        .add([0.0, 1.1, -0.15], [0.35, 0.6, 0.2], hair)
        .add([-0.35, 0.7, 0.0], [0.12, 0.4, 0.12], skin)
        .add([0.35, 0.7, 0.0], [0.12, 0.4, 0.12], skin)
        .add([-0.35, 0.35, 0.0], [0.12, 0.35, 0.12], skin)
        .add([0.35, 0.35, 0.0], [0.12, 0.35, 0.12], skin)
        .add_turned([-0.2, 0.1, 0.2], [0.15, 0.08, 0.25], 0.3, 0x2e_cc71)
        .add([-0.12, -0.225, 0.0], [0.18, 0.45, 0.18], 0x1a_1a1a)
        .add([0.12, -0.225, 0.0], [0.18, 0.45, 0.18], 0x1a_1a1a);
    out
}
