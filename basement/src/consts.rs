//! Shared numeric constants for the basement crate.

use glam::Vec3;

// ── World ───────────────────────────────────────────────────────

/// Half-extent of the square the player may walk in (x and z).
pub const PLAYER_BOUNDARY: f32 = 60.0;

/// Half-extent of the square the car may drive in (x and z).
pub const VEHICLE_BOUNDARY: f32 = 50.0;

/// Longest frame step fed to the integrators, in seconds.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Height of the outdoor ground plane.
pub const GROUND_Y: f32 = 0.0;

/// Height of the basement floor.
pub const BASEMENT_FLOOR_Y: f32 = -4.0;

/// Below this height the player is considered to be inside the basement.
pub const BASEMENT_CEILING_Y: f32 = -1.0;

// ── Player ──────────────────────────────────────────────────────

/// Eye height above the feet.
pub const PLAYER_HEIGHT: f32 = 1.6;

/// Where the player's feet start, just above the basement floor.
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, BASEMENT_FLOOR_Y + 0.6, 0.0);

/// Walking speed in units per second.
pub const BASE_SPEED: f32 = 6.5;

/// Multiplier applied while sprint is held.
pub const SPRINT_MULTIPLIER: f32 = 1.6;

/// Velocity blend rate while movement keys are held.
pub const ACCEL_RATE: f32 = 16.0;

/// Velocity blend rate on the ground with no input.
pub const DECEL_RATE: f32 = 10.0;

/// Velocity blend rate in the air with no input.
pub const AIR_DECEL_RATE: f32 = 5.0;

/// Vertical velocity given by a jump.
pub const JUMP_IMPULSE: f32 = 9.0;

/// Vertical acceleration (negative is down).
pub const GRAVITY: f32 = -24.0;

/// Horizontal speeds below this snap to zero.
pub const HORIZONTAL_EPSILON: f32 = 0.02;

// ── Stairs ──────────────────────────────────────────────────────

/// X coordinate of the stair centre line.
pub const STAIRS_X: f32 = 4.0;

/// Width of the stair footprint along x.
pub const STAIRS_WIDTH: f32 = 2.5;

/// Z coordinate of the bottom step.
pub const STAIRS_START_Z: f32 = 5.5;

/// Z coordinate of the top step.
pub const STAIRS_END_Z: f32 = 1.0;

/// Total rise from the basement floor to the ground.
pub const STAIRS_HEIGHT: f32 = 4.0;

/// Number of steps, used for the half-step lift on the ramp.
pub const STAIRS_STEPS: f32 = 12.0;

/// Largest gap between the integrated height and the ramp that still snaps.
pub const STAIRS_SNAP_TOLERANCE: f32 = 1.2;

// ── Seating ─────────────────────────────────────────────────────

/// Driver seat relative to the car origin, in car space.
pub const SEAT_OFFSET: Vec3 = Vec3::new(-0.35, 1.0, 0.6);

/// Where the player is placed on exit, relative to the car, in car space.
pub const EXIT_OFFSET: Vec3 = Vec3::new(-0.8, 0.0, -1.2);

// ── Vehicle ─────────────────────────────────────────────────────

/// Throttle acceleration in units per second squared.
pub const VEHICLE_ACCEL: f32 = 35.0;

/// Speed cap.
pub const VEHICLE_MAX_SPEED: f32 = 40.0;

/// Steering rate in radians per second at full speed coupling.
pub const VEHICLE_TURN_SPEED: f32 = 3.0;

/// Velocity retained per reference frame while coasting.
pub const VEHICLE_FRICTION: f32 = 0.92;

/// Velocity retained per reference frame with the handbrake held.
pub const VEHICLE_HANDBRAKE: f32 = 0.85;

/// Frame rate the friction factors are expressed against.
pub const FRICTION_REFERENCE_HZ: f32 = 60.0;

/// Per-axis velocity below this snaps to zero.
pub const VEHICLE_STOP_EPSILON: f32 = 0.01;

/// Minimum speed for steering and gear changes to take effect.
pub const VEHICLE_TURN_GATE: f32 = 0.5;

/// Speed at which steering reaches its full rate.
pub const VEHICLE_FULL_TURN_SPEED: f32 = 15.0;

/// Tachometer reading at rest.
pub const IDLE_RPM: f32 = 1000.0;

/// Tachometer increase per unit of speed.
pub const RPM_PER_SPEED: f32 = 200.0;

/// Speed band covered by each gear.
pub const GEAR_SPAN: f32 = 8.0;

/// Highest gear.
pub const TOP_GEAR: u8 = 5;

/// Where the car starts: on the ground in front of the house.
pub const VEHICLE_SPAWN: Vec3 = Vec3::new(0.0, GROUND_Y, 10.0);

// ── Interaction ─────────────────────────────────────────────────

/// Reach of the interact key toward the car.
pub const VEHICLE_REACH: f32 = 5.0;

/// Reach of the interact key toward the NPC.
pub const NPC_REACH: f32 = 2.5;

/// Resting position of the NPC's feet.
pub const NPC_ANCHOR: Vec3 = Vec3::new(-3.0, -4.4, 2.0);

/// Idle bob amplitude.
pub const NPC_BOB_AMPLITUDE: f32 = 0.05;

/// Idle bob angular rate.
pub const NPC_BOB_RATE: f32 = 2.0;

/// Money awarded by the NPC.
pub const NPC_REWARD: u32 = 100;

// ── Camera ──────────────────────────────────────────────────────

/// Radians of rotation per pixel of mouse movement.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch is clamped to ± this value, just short of straight up/down.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Vertical field of view in degrees.
pub const FOV_Y_DEG: f32 = 75.0;

/// Distance of the near clipping plane.
pub const NEAR_PLANE: f32 = 0.1;

// ── HUD ─────────────────────────────────────────────────────────

/// Length of each crosshair arm in pixels.
pub const CROSSHAIR_SIZE: f64 = 15.0;

/// Crosshair line thickness in pixels.
pub const CROSSHAIR_THICKNESS: f64 = 2.0;

/// Empty gap at the crosshair centre in pixels.
pub const CROSSHAIR_GAP: f64 = 5.0;

/// Health bar width at full health.
pub const HEALTH_BAR_WIDTH: f64 = 200.0;

/// Health bar height.
pub const HEALTH_BAR_HEIGHT: f64 = 20.0;

/// Minimap side length in pixels.
pub const MINIMAP_SIZE: f64 = 150.0;

/// Gap between the minimap and the viewport edge.
pub const MINIMAP_MARGIN: f64 = 20.0;

/// Inset of the mapped area within the minimap frame.
pub const MINIMAP_PADDING: f64 = 20.0;

/// Radius of the actor markers on the minimap.
pub const MARKER_RADIUS: f64 = 4.0;
