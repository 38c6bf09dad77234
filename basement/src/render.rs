//! Rendering: draws the 3D scene and the HUD to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine state and produces pixels; it
//! does not mutate any simulation state.
//!
//! The scene is painted back to front: visible faces of every solid are
//! culled against the eye, clipped to the near plane, projected, then
//! sorted by layer and depth.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{HEALTH_BAR_HEIGHT, HEALTH_BAR_WIDTH, MARKER_RADIUS};
use crate::engine::EngineCore;
use crate::hud::{self, Gauges, HudStats, HudView, Minimap};
use crate::scene::{Layer, Rgb, Solid, Zone, npc_solids, vehicle_solids};

/// Sky fill when outdoors.
const SKY: &str = "#87ceeb";

/// Fill behind the basement shell.
const BASEMENT_GLOOM: &str = "#1a1410";

/// Crosshair fill.
const CROSSHAIR_COLOR: &str = "rgba(0, 255, 0, 0.8)";

/// A face ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenPoly {
    pub layer: Layer,
    /// Mean view-space depth; larger is farther.
    pub depth: f32,
    pub points: Vec<Point>,
    pub color: Rgb,
}

/// Draw the full frame: backdrop, scene and HUD.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let w = core.viewport_width;
    let h = core.viewport_height;
    let zone = Zone::containing(core.camera.position.y);

    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(if zone == Zone::Basement { BASEMENT_GLOOM } else { SKY });
    ctx.fill_rect(0.0, 0.0, w, h);

    let dynamic = actor_solids(core);
    let solids = core.scene.visible(zone).chain(dynamic.iter().filter(|s| s.zone.visible_from(zone)));
    for poly in project_solids(&core.camera, solids, w, h) {
        fill_poly(ctx, &poly);
    }

    draw_hud(ctx, &core.hud_view(), w, h)
}

/// The car and the NPC at their current transforms.
fn actor_solids(core: &EngineCore) -> Vec<Solid> {
    let mut out = vehicle_solids(&core.vehicle.transform());
    out.extend(npc_solids(core.npc.position()));
    out
}

// =============================================================
// Scene
// =============================================================

/// Cull, clip, project and sort the faces of `solids` for `camera`.
#[must_use]
pub fn project_solids<'a>(camera: &Camera, solids: impl Iterator<Item = &'a Solid>, w: f64, h: f64) -> Vec<ScreenPoly> {
    let mut polys = Vec::new();
    for solid in solids {
        for face in solid.faces() {
            if !face.faces_toward(camera.position) {
                continue;
            }
            let view = face.corners.map(|c| camera.to_view(c));
            let clipped = camera.clip_near(&view);
            if clipped.len() < 3 {
                continue;
            }
            let points: Vec<Point> = clipped.iter().filter_map(|v| camera.project_view(*v, w, h)).collect();
            if points.len() < 3 {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let depth = clipped.iter().map(|v| v.z).sum::<f32>() / clipped.len() as f32;
            polys.push(ScreenPoly { layer: solid.layer, depth, points, color: face.color });
        }
    }
    polys.sort_by(|a, b| a.layer.cmp(&b.layer).then(b.depth.total_cmp(&a.depth)));
    polys
}

fn fill_poly(ctx: &CanvasRenderingContext2d, poly: &ScreenPoly) {
    let Some((first, rest)) = poly.points.split_first() else {
        return;
    };
    let css = poly.color.css();
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.set_fill_style_str(&css);
    ctx.fill();
    // Hairline in the same colour hides seams between adjacent faces.
    ctx.set_stroke_style_str(&css);
    ctx.set_line_width(0.5);
    ctx.stroke();
}

// =============================================================
// HUD
// =============================================================

fn draw_hud(ctx: &CanvasRenderingContext2d, view: &HudView, w: f64, h: f64) -> Result<(), JsValue> {
    draw_crosshair(ctx, Point::new(w / 2.0, h / 2.0));
    draw_health(ctx, &view.stats, h)?;
    draw_counters(ctx, &view.stats, w, h)?;
    if let Some(gauges) = view.gauges {
        draw_gauges(ctx, &gauges, w, h)?;
    }
    draw_minimap(ctx, view, w)
}

fn draw_crosshair(ctx: &CanvasRenderingContext2d, center: Point) {
    ctx.set_fill_style_str(CROSSHAIR_COLOR);
    for r in hud::crosshair_rects(center) {
        ctx.fill_rect(r.x, r.y, r.w, r.h);
    }
}

fn draw_health(ctx: &CanvasRenderingContext2d, stats: &HudStats, h: f64) -> Result<(), JsValue> {
    let y = h - 60.0;
    ctx.set_fill_style_str("rgba(51, 51, 51, 0.8)");
    ctx.fill_rect(20.0, y, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT);
    ctx.set_fill_style_str(hud::health_color(stats.health));
    ctx.fill_rect(20.0, y, hud::health_bar_width(stats.health), HEALTH_BAR_HEIGHT);

    ctx.set_font("bold 14px monospace");
    ctx.set_fill_style_str("#ffffff");
    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");
    ctx.fill_text(&stats.health_label(), 25.0, h - 45.0)
}

fn draw_counters(ctx: &CanvasRenderingContext2d, stats: &HudStats, w: f64, h: f64) -> Result<(), JsValue> {
    ctx.set_stroke_style_str("#000000");
    ctx.set_line_width(3.0);

    ctx.set_font("bold 32px monospace");
    ctx.set_fill_style_str("#ffffff");
    let ammo = stats.ammo_label();
    let ammo_w = ctx.measure_text(&ammo)?.width();
    ctx.stroke_text(&ammo, w - ammo_w - 30.0, h - 30.0)?;
    ctx.fill_text(&ammo, w - ammo_w - 30.0, h - 30.0)?;

    ctx.set_font("bold 24px monospace");
    ctx.set_fill_style_str("#2ecc71");
    let money = stats.money_label();
    ctx.stroke_text(&money, 30.0, 50.0)?;
    ctx.fill_text(&money, 30.0, 50.0)
}

fn draw_gauges(ctx: &CanvasRenderingContext2d, gauges: &Gauges, w: f64, h: f64) -> Result<(), JsValue> {
    let text = gauges.label();
    ctx.set_font("bold 16px monospace");
    ctx.set_fill_style_str("#00ff00");
    ctx.set_text_align("center");
    ctx.fill_text(&text, w / 2.0, h - 30.0)?;
    ctx.set_text_align("left");
    Ok(())
}

fn draw_minimap(ctx: &CanvasRenderingContext2d, view: &HudView, w: f64) -> Result<(), JsValue> {
    let map = Minimap::anchored(w);
    let f = map.frame;

    ctx.set_fill_style_str("rgba(0, 0, 0, 0.6)");
    ctx.fill_rect(f.x, f.y, f.w, f.h);
    ctx.set_stroke_style_str("#00ff00");
    ctx.set_line_width(2.0);
    ctx.stroke_rect(f.x, f.y, f.w, f.h);

    ctx.set_font("bold 10px monospace");
    ctx.set_fill_style_str("#00ff00");
    ctx.fill_text("MINIMAP", f.x + 5.0, f.y + 15.0)?;

    let inner = map.inner();
    ctx.set_stroke_style_str("rgba(0, 255, 0, 0.5)");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(inner.x, inner.y, inner.w, inner.h);
    let room = map.basement_outline();
    ctx.stroke_rect(room.x, room.y, room.w, room.h);

    for marker in map.markers(view.player, view.vehicle, view.npc) {
        ctx.set_fill_style_str(marker.kind.color());
        ctx.begin_path();
        ctx.arc(marker.at.x, marker.at.y, MARKER_RADIUS, 0.0, 2.0 * PI)?;
        ctx.fill();
    }
    Ok(())
}
