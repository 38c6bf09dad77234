//! Basement sandbox page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas fills the viewport; tracker cards and the map overlay sit on
//! top of it and share `TrackerState` with the game host.

use leptos::prelude::*;

use crate::components::basement_map::BasementMap;
use crate::components::game_host::GameHost;
use crate::components::tracker_panel::TrackerPanel;
use crate::state::tracker::TrackerState;

#[component]
pub fn BasementPage() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();

    // Leaving the page must not carry an open overlay into the next visit.
    on_cleanup(move || {
        tracker.try_update(TrackerState::close_map);
    });

    view! {
        <div class="basement">
            <a class="basement__return" href="/">"<< Return to Black Mesa"</a>
            <GameHost/>
            <TrackerPanel/>
            <BasementMap/>
        </div>
    }
}
