//! Floor plan overlay. Open while `TrackerState::map_open` is set.

use leptos::prelude::*;

use crate::state::tracker::{REGIONS, TrackerState};

#[component]
pub fn BasementMap() -> impl IntoView {
    let tracker = expect_context::<RwSignal<TrackerState>>();
    let is_focused = move |id: &'static str| move || tracker.with(|t| t.focused_region == id);

    let plan_regions = move || {
        REGIONS
            .iter()
            .map(|region| {
                let id = region.id;
                view! {
                    <button
                        class="map__region"
                        class:map__region--active=is_focused(id)
                        style=region.style()
                        on:mouseenter=move |_| tracker.update(|t| t.focus_region(id))
                        on:focus=move |_| tracker.update(|t| t.focus_region(id))
                        on:click=move |_| tracker.update(|t| t.focus_region(id))
                    >
                        <span class="map__region-name">{region.name}</span>
                        <span class="map__region-summary">{region.summary}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let sector_list = move || {
        REGIONS
            .iter()
            .map(|region| {
                let id = region.id;
                view! {
                    <button
                        class="map__sector"
                        class:map__sector--active=is_focused(id)
                        on:mouseenter=move |_| tracker.update(|t| t.focus_region(id))
                        on:click=move |_| tracker.update(|t| t.focus_region(id))
                    >
                        <p class="map__sector-name">{region.name}</p>
                        <p class="map__sector-summary">{region.summary}</p>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || tracker.with(|t| t.map_open)>
            <div class="map" role="dialog" aria-modal="true" on:click=move |_| tracker.update(TrackerState::close_map)>
                <div class="map__panel" on:click=|ev| ev.stop_propagation()>
                    <div class="map__header">
                        <div>
                            <p class="map__eyebrow">"\u{203a} Basement Floor Plan"</p>
                            <p class="map__title">"Sublevel Blueprint"</p>
                            <p class="map__subtitle">
                                "Hover or tap a zone to pin its briefing. Street access is via the storage lift stairs."
                            </p>
                        </div>
                        <button class="map__close" on:click=move |_| tracker.update(TrackerState::close_map)>
                            "Close"
                        </button>
                    </div>
                    <div class="map__body">
                        <div class="map__plan">
                            <div class="map__plan-frame"></div>
                            {plan_regions}
                            <div class="map__version">"Blueprint v2.0"</div>
                        </div>
                        <div class="map__sidebar">
                            <div class="map__sidebar-head">
                                <p class="map__sidebar-title">"Sectors"</p>
                                <p class="map__sidebar-note">"Use the overlay to orient inside the simulation."</p>
                            </div>
                            <div class="map__sectors">{sector_list}</div>
                            <div class="map__detail">
                                <p class="map__detail-name">{move || tracker.with(|t| t.active_region().name)}</p>
                                <p class="map__detail-text">{move || tracker.with(|t| t.active_region().detail)}</p>
                            </div>
                        </div>
                    </div>
                    <p class="map__footer">"Press M or Escape to close the map overlay."</p>
                </div>
            </div>
        </Show>
    }
}
