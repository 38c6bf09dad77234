//! Simulation and canvas rendering engine for the basement sandbox.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! transient state of the sandbox: the first-person player, the drivable car,
//! the idle NPC and the HUD counters. The host component is responsible only
//! for wiring DOM events and the animation frame to the engine and reacting to
//! the resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | First-person camera, view transform and projection |
//! | [`input`] | Key bindings and derived movement/drive intents |
//! | [`player`] | First-person movement integrator |
//! | [`vehicle`] | Drivable car integrator |
//! | [`npc`] | Idle NPC and approach tracking |
//! | [`interact`] | Interact-key resolution and on-screen hints |
//! | [`scene`] | Static world geometry and dynamic actor parts |
//! | [`hud`] | HUD counters, crosshair and minimap mapping |
//! | [`render`] | Scene and HUD rendering to a 2D context |
//! | [`consts`] | Shared tuning constants (speeds, limits, offsets, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod hud;
pub mod input;
pub mod interact;
pub mod npc;
pub mod player;
pub mod render;
pub mod scene;
pub mod vehicle;
