//! Status cards and controls legend layered over the sandbox canvas.

use leptos::prelude::*;

use crate::state::tracker::{CONTROLS_LEGEND, TrackerState};

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

/// Roll a new status line and stamp it with the local wall-clock time.
#[cfg(feature = "hydrate")]
fn rotate(tracker: RwSignal<TrackerState>) {
    let stamp = js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_default();
    tracker.update(|t| t.rotate_status(js_sys::Math::random(), stamp));
}

#[component]
pub fn TrackerPanel() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_loop = Arc::clone(&alive);
        // First roll waits until after hydration so the markup matches the server's.
        Effect::new(move |_| rotate(tracker));
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(crate::state::tracker::STATUS_ROTATE_MS).await;
                if !alive_for_loop.load(Ordering::Relaxed) {
                    break;
                }
                rotate(tracker);
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="tracker">
            <div class="tracker__top">
                <div class="tracker__card tracker__card--status">
                    <div class="tracker__meta">
                        <span class="tracker__live">"LIVE"</span>
                        <span class="tracker__updated">
                            "Last updated: " {move || tracker.with(|t| t.last_update.clone())}
                        </span>
                    </div>
                    <h1 class="tracker__title">"Basement & Street Ops Tracker\u{2122}"</h1>
                    <p class="tracker__status">{move || tracker.with(TrackerState::status_line)}</p>
                </div>
                <div class="tracker__card tracker__card--stats">
                    <div class="tracker__stat">
                        <div class="tracker__stat-value tracker__stat-value--blue">"24/7"</div>
                        <div class="tracker__stat-label">"Uptime"</div>
                    </div>
                    <div class="tracker__stat">
                        <div class="tracker__stat-value tracker__stat-value--purple">"\u{221e}"</div>
                        <div class="tracker__stat-label">"Days Here"</div>
                    </div>
                    <div class="tracker__stat">
                        <div class="tracker__stat-value tracker__stat-value--green">
                            {move || tracker.with(TrackerState::cash_label)}
                        </div>
                        <div class="tracker__stat-label">"Basement Cash"</div>
                    </div>
                </div>
            </div>
            <div class="tracker__card tracker__legend">
                <p>{CONTROLS_LEGEND}</p>
                {move || tracker.with(|t| t.hint).map(|hint| view! { <p class="tracker__hint">{hint}</p> })}
            </div>
            <button
                class="tracker__map-button"
                class:tracker__map-button--open=move || tracker.with(|t| t.map_open)
                aria-pressed=move || tracker.with(|t| t.map_open.to_string())
                on:click=move |_| tracker.update(TrackerState::toggle_map)
            >
                "Basement Map "
                <span class="tracker__key">"[M]"</span>
            </button>
        </div>
    }
}
