//! Bridge component between Leptos state and the imperative `basement::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The basement crate owns simulation and drawing. This host mounts the
//! engine on a canvas, drives it from `requestAnimationFrame`, forwards
//! window input, and mirrors engine actions into [`TrackerState`] so the
//! surrounding chrome can render them. The map overlay flag flows the other
//! way: the host pauses the engine whenever the overlay is open.

use leptos::prelude::*;

use crate::state::tracker::TrackerState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use basement::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use basement::input::Key;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::tracker::ChromeKey;
#[cfg(feature = "hydrate")]
use crate::util::engine_audio::EngineAudio;

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;
#[cfg(feature = "hydrate")]
type SharedAudio = Rc<RefCell<Option<EngineAudio>>>;
#[cfg(feature = "hydrate")]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Read the canvas CSS size and device pixel ratio, then push them to the engine.
#[cfg(feature = "hydrate")]
fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}

#[cfg(feature = "hydrate")]
fn pointer_locked() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.pointer_lock_element())
        .is_some()
}

#[cfg(feature = "hydrate")]
fn release_pointer() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.exit_pointer_lock();
    }
}

/// Mirror engine actions into chrome state and side effects.
#[cfg(feature = "hydrate")]
fn apply_actions(actions: Vec<Action>, tracker: RwSignal<TrackerState>, audio: &SharedAudio) {
    for action in actions {
        match action {
            Action::VehicleChanged(in_car) => {
                tracker.update(|t| t.in_car = in_car);
                if let Some(audio) = audio.borrow().as_ref() {
                    if let Err(e) = audio.set_in_car(in_car) {
                        log::debug!("engine volume change failed: {e:?}");
                    }
                }
            }
            Action::MoneyChanged(total) => tracker.update(|t| t.money = total),
            Action::HintChanged(hint) => tracker.update(|t| t.hint = hint.map(|h| h.label())),
            Action::ReleasePointer => release_pointer(),
        }
    }
}

/// Start the engine drone on the first user gesture.
#[cfg(feature = "hydrate")]
fn start_audio(audio: &SharedAudio, in_car: bool) {
    let mut slot = audio.borrow_mut();
    if slot.as_ref().is_some_and(EngineAudio::started) {
        return;
    }
    if slot.is_none() {
        match EngineAudio::new() {
            Ok(graph) => *slot = Some(graph),
            Err(e) => {
                log::warn!("engine audio unavailable: {e:?}");
                return;
            }
        }
    }
    if let Some(graph) = slot.as_mut() {
        if let Err(e) = graph.start(in_car) {
            log::debug!("engine audio start deferred: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn schedule_frame(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
    }
}

/// Run tick + render every animation frame until `alive` clears.
#[cfg(feature = "hydrate")]
fn start_frame_loop(engine: SharedEngine, audio: SharedAudio, tracker: RwSignal<TrackerState>, alive: Arc<AtomicBool>) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let callback_for_frame = Rc::clone(&callback);
    let mut last_ts: Option<f64> = None;

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            if let Some(mut graph) = audio.borrow_mut().take() {
                graph.stop();
            }
            engine.borrow_mut().take();
            callback_for_frame.borrow_mut().take();
            return;
        }
        let dt = last_ts.map_or(0.0, |prev| (ts - prev).max(0.0) / 1000.0);
        last_ts = Some(ts);

        let actions = match engine.borrow_mut().as_mut() {
            Some(engine) => {
                let actions = engine.tick(dt);
                if let Err(e) = engine.render() {
                    log::warn!("basement render failed: {e:?}");
                }
                actions
            }
            None => Vec::new(),
        };
        apply_actions(actions, tracker, &audio);
        schedule_frame(&callback_for_frame);
    }) as Box<dyn FnMut(f64)>));

    schedule_frame(&callback);
}

/// Canvas host for the basement sandbox.
///
/// On hydration this mounts `basement::engine::Engine`, runs the frame loop,
/// and listens for keyboard, mouse-look, focus and resize events on the window.
#[component]
pub fn GameHost() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let map_open = Memo::new(move |_| tracker.with(|t| t.map_open));

    #[cfg(feature = "hydrate")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    #[cfg(feature = "hydrate")]
    let audio: SharedAudio = Rc::new(RefCell::new(None));
    #[cfg(feature = "hydrate")]
    let alive = Arc::new(AtomicBool::new(true));

    // Mount once the canvas exists.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let audio = Rc::clone(&audio);
        let alive = Arc::clone(&alive);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = Engine::new(canvas);
            sync_viewport(&mut instance, &canvas_ref);
            let hint = instance.core.hint;
            tracker.update(|t| {
                t.hint = hint.map(|h| h.label());
                t.in_car = instance.in_car();
                t.money = instance.stats().money;
            });
            *engine.borrow_mut() = Some(instance);
            start_frame_loop(Rc::clone(&engine), Rc::clone(&audio), tracker, Arc::clone(&alive));
        });
    }

    // The overlay pauses the simulation.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let audio = Rc::clone(&audio);
        Effect::new(move || {
            let open = map_open.get();
            let actions = engine.borrow_mut().as_mut().map(|e| e.set_paused(open)).unwrap_or_default();
            apply_actions(actions, tracker, &audio);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let key_down = {
            let engine = Rc::clone(&engine);
            let audio = Rc::clone(&audio);
            window_event_listener(leptos::ev::keydown, move |ev| {
                let key = ev.key();
                let repeat = ev.repeat();
                let chrome = tracker.try_update(|t| t.on_key(&key, repeat)).unwrap_or(ChromeKey::Ignored);
                if chrome == ChromeKey::Handled {
                    if key.eq_ignore_ascii_case("m") {
                        ev.prevent_default();
                    }
                    return;
                }
                start_audio(&audio, tracker.with_untracked(|t| t.in_car));
                let Some(binding) = Key::from_browser(&key) else {
                    return;
                };
                if binding == Key::Jump {
                    ev.prevent_default();
                }
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(|e| e.on_key_down(binding, repeat))
                    .unwrap_or_default();
                apply_actions(actions, tracker, &audio);
            })
        };

        let key_up = {
            let engine = Rc::clone(&engine);
            window_event_listener(leptos::ev::keyup, move |ev| {
                if let Some(binding) = Key::from_browser(&ev.key()) {
                    if let Some(engine) = engine.borrow_mut().as_mut() {
                        engine.on_key_up(binding);
                    }
                }
            })
        };

        let mouse_move = {
            let engine = Rc::clone(&engine);
            window_event_listener(leptos::ev::mousemove, move |ev| {
                if !pointer_locked() {
                    return;
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_look(f64::from(ev.movement_x()), f64::from(ev.movement_y()));
                }
            })
        };

        let pointer_down = {
            let audio = Rc::clone(&audio);
            window_event_listener(leptos::ev::pointerdown, move |_| {
                start_audio(&audio, tracker.with_untracked(|t| t.in_car));
            })
        };

        let blur = {
            let engine = Rc::clone(&engine);
            window_event_listener(leptos::ev::blur, move |_| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.clear_input();
                }
            })
        };

        let visibility = {
            let engine = Rc::clone(&engine);
            window_event_listener(leptos::ev::visibilitychange, move |_| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.clear_input();
                }
            })
        };

        let resize = {
            let engine = Rc::clone(&engine);
            window_event_listener(leptos::ev::resize, move |_| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    sync_viewport(engine, &canvas_ref);
                }
            })
        };

        let alive = Arc::clone(&alive);
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            for handle in [key_down, key_up, mouse_move, pointer_down, blur, visibility, resize] {
                handle.remove();
            }
            release_pointer();
        });
    }

    let on_canvas_click = move |_ev: leptos::ev::MouseEvent| {
        if map_open.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(canvas) = canvas_ref.get_untracked() {
            canvas.request_pointer_lock();
        }
    };

    view! {
        <canvas class="game-canvas" node_ref=canvas_ref tabindex="0" on:click=on_canvas_click></canvas>
    }
}
