use glam::Vec3;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;
use crate::consts::{MAX_FRAME_DT, NPC_REWARD};
use crate::hud::{Gauges, HudStats, HudView};
use crate::input::{Key, KeyState};
use crate::interact::{self, Hint, Interaction};
use crate::npc::Npc;
use crate::player::Player;
use crate::render;
use crate::scene::SceneGraph;
use crate::vehicle::Vehicle;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers and frame steps for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The player got into (`true`) or out of (`false`) the car.
    VehicleChanged(bool),
    /// The money counter changed to the given total.
    MoneyChanged(u32),
    /// The contextual hint changed.
    HintChanged(Option<Hint>),
    /// The host should release pointer lock.
    ReleasePointer,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// This is the only writer of actor transforms; the renderer and the host read.
pub struct EngineCore {
    pub camera: Camera,
    pub keys: KeyState,
    pub player: Player,
    pub vehicle: Vehicle,
    pub npc: Npc,
    pub scene: SceneGraph,
    pub stats: HudStats,
    pub in_car: bool,
    pub paused: bool,
    pub hint: Option<Hint>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        let mut core = Self {
            camera: Camera::default(),
            keys: KeyState::default(),
            player: Player::default(),
            vehicle: Vehicle::default(),
            npc: Npc::default(),
            scene: SceneGraph::world(),
            stats: HudStats::default(),
            in_car: false,
            paused: false,
            hint: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        };
        core.hint = core.compute_hint();
        core
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Input ---

    /// Handle a bound key going down. `repeat` is the browser's auto-repeat flag.
    ///
    /// Map keys are owned by the host, which reports the result through
    /// [`EngineCore::set_paused`]; they are ignored here.
    pub fn on_key_down(&mut self, key: Key, repeat: bool) -> Vec<Action> {
        if self.paused {
            return Vec::new();
        }
        match key {
            Key::Interact if !repeat => self.interact(),
            Key::Interact | Key::ToggleMap | Key::Escape => Vec::new(),
            held => {
                self.keys.press(held);
                Vec::new()
            }
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Apply a pointer-lock mouse movement.
    pub fn on_look(&mut self, dx: f64, dy: f64) {
        if !self.paused {
            self.camera.look(dx, dy);
        }
    }

    /// Release all held keys (window blur, tab hidden).
    pub fn clear_input(&mut self) {
        self.keys.clear();
    }

    /// Pause or resume input. Pausing drops held keys and momentum.
    pub fn set_paused(&mut self, paused: bool) -> Vec<Action> {
        if self.paused == paused {
            return Vec::new();
        }
        self.paused = paused;
        let mut actions = Vec::new();
        if paused {
            self.keys.clear();
            self.player.halt();
            actions.push(Action::ReleasePointer);
        }
        self.refresh_hint(&mut actions);
        actions
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Frame ---

    /// Advance the simulation by `dt` seconds (clamped to `MAX_FRAME_DT`).
    pub fn tick(&mut self, dt: f64) -> Vec<Action> {
        #[allow(clippy::cast_possible_truncation)]
        let dt = (dt as f32).clamp(0.0, MAX_FRAME_DT);
        let mut actions = Vec::new();

        if self.paused {
            self.player.halt();
            self.vehicle.step(None, dt);
        } else if self.in_car {
            self.vehicle.step(Some(self.keys.drive_intent()), dt);
            self.player.seat_in(&self.vehicle.transform());
        } else {
            self.player.step(self.keys.move_intent(), &self.camera, dt);
            self.vehicle.step(None, dt);
        }
        self.camera.position = self.eye();

        if self.npc.step(self.player.position, dt) {
            self.award(&mut actions);
        }
        self.refresh_hint(&mut actions);
        actions
    }

    // --- Queries ---

    /// Where the camera sits: the seat while driving, eye height on foot.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        if self.in_car { self.player.position } else { self.player.eye() }
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn stats(&self) -> HudStats {
        self.stats
    }

    /// What the HUD draws this frame. Gauges appear only while driving.
    #[must_use]
    pub fn hud_view(&self) -> HudView {
        HudView {
            stats: self.stats,
            gauges: self.in_car.then_some(Gauges { gear: self.vehicle.gear, rpm: self.vehicle.rpm }),
            player: self.player.position,
            vehicle: self.vehicle.position,
            npc: self.npc.position(),
        }
    }

    // --- Internals ---

    fn interact(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        let resolved = interact::resolve(self.player.position, self.in_car, self.vehicle.position, &self.npc);
        match resolved {
            Some(Interaction::EnterVehicle) => {
                self.in_car = true;
                self.player.seat_in(&self.vehicle.transform());
                actions.push(Action::VehicleChanged(true));
            }
            Some(Interaction::ExitVehicle) => {
                self.in_car = false;
                self.player.exit_to(&self.vehicle.transform());
                actions.push(Action::VehicleChanged(false));
            }
            Some(Interaction::TalkToNpc) => self.award(&mut actions),
            None => {}
        }
        self.camera.position = self.eye();
        self.refresh_hint(&mut actions);
        actions
    }

    fn award(&mut self, actions: &mut Vec<Action>) {
        self.stats.money = self.stats.money.saturating_add(NPC_REWARD);
        actions.push(Action::MoneyChanged(self.stats.money));
    }

    fn compute_hint(&self) -> Option<Hint> {
        interact::hint(self.paused, self.player.position, self.in_car, self.vehicle.position, &self.npc)
    }

    fn refresh_hint(&mut self, actions: &mut Vec<Action>) {
        let hint = self.compute_hint();
        if hint != self.hint {
            self.hint = hint;
            actions.push(Action::HintChanged(hint));
        }
    }
}

/// The full sandbox engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing store to match.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (w, h) = ((width_css * dpr).round().max(1.0) as u32, (height_css * dpr).round().max(1.0) as u32);
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    // --- Delegated input ---

    pub fn on_key_down(&mut self, key: Key, repeat: bool) -> Vec<Action> {
        self.core.on_key_down(key, repeat)
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.core.on_key_up(key);
    }

    pub fn on_look(&mut self, dx: f64, dy: f64) {
        self.core.on_look(dx, dy);
    }

    pub fn clear_input(&mut self) {
        self.core.clear_input();
    }

    pub fn set_paused(&mut self, paused: bool) -> Vec<Action> {
        self.core.set_paused(paused)
    }

    pub fn tick(&mut self, dt: f64) -> Vec<Action> {
        self.core.tick(dt)
    }

    // --- Render ---

    /// Draw the current state to the canvas. A canvas without a 2D context is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Ok(());
        };
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>().map_err(JsValue::from)?;
        render::draw(&ctx, &self.core)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn in_car(&self) -> bool {
        self.core.in_car
    }

    #[must_use]
    pub fn stats(&self) -> HudStats {
        self.core.stats()
    }
}
