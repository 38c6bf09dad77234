//! Retro terminal menu on the home page.
//!
//! Left column lists the main items or the open submenu; right column is the
//! briefing panel for whatever is highlighted. All transitions go through
//! [`MenuState`]; this component only performs the resulting navigation.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::menu::{KeyOutcome, is_text_entry};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
use crate::state::menu::{Destination, MenuMode, MenuState, StatusTone, format_category};
use crate::util::menu_catalog::MAIN_ITEMS;

/// Perform the side effect a menu selection asks for.
fn follow(destination: Destination, navigate: &impl Fn(&str, leptos_router::NavigateOptions)) {
    match destination {
        Destination::External(url) => {
            #[cfg(feature = "hydrate")]
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer") {
                    log::warn!("open {url} failed: {e:?}");
                }
            }
            #[cfg(not(feature = "hydrate"))]
            drop(url);
        }
        Destination::Hash(id) => {
            #[cfg(feature = "hydrate")]
            crate::util::scroll::go_to_hash(&id);
            #[cfg(not(feature = "hydrate"))]
            drop(id);
        }
        Destination::Route(path) => navigate(&path, leptos_router::NavigateOptions::default()),
        Destination::Location(href) => {
            #[cfg(feature = "hydrate")]
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&href) {
                    log::warn!("navigate to {href} failed: {e:?}");
                }
            }
            #[cfg(not(feature = "hydrate"))]
            drop(href);
        }
        Destination::Inert => {}
    }
}

#[component]
pub fn TerminalMenu() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let navigate = leptos_router::hooks::use_navigate();
    let mode = Memo::new(move |_| menu.with(|m| m.mode));

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let typing = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
                .is_some_and(|el| is_text_entry(&el.tag_name(), el.is_content_editable()));
            if typing {
                return;
            }
            let outcome = menu.try_update(|m| m.key(&ev.key())).unwrap_or(KeyOutcome::Ignored);
            match outcome {
                KeyOutcome::Ignored => {}
                KeyOutcome::Handled => ev.prevent_default(),
                KeyOutcome::Navigate(destination) => {
                    ev.prevent_default();
                    follow(destination, &navigate);
                }
            }
        });
        on_cleanup(move || handle.remove());
    }

    let main_list = {
        let navigate = navigate.clone();
        move || {
            MAIN_ITEMS
                .iter()
                .map(|item| {
                    let id = item.id;
                    let navigate = navigate.clone();
                    let active = move || menu.with(|m| m.active_id == id);
                    view! {
                        <li>
                            <button
                                class="terminal-menu__item"
                                class:terminal-menu__item--active=active
                                on:mouseenter=move |_| menu.update(|m| m.hover_main(id))
                                on:focus=move |_| menu.update(|m| m.hover_main(id))
                                on:click=move |_| {
                                    let destination = menu.try_update(|m| m.click_main(id)).unwrap_or(Destination::Inert);
                                    follow(destination, &navigate);
                                }
                            >
                                <span class="terminal-menu__caret">{move || if active() { ">" } else { "\u{a0}" }}</span>
                                {item.label}
                            </button>
                        </li>
                    }
                })
                .collect_view()
        }
    };

    let submenu_list = move || {
        let navigate = navigate.clone();
        menu.with_untracked(MenuState::submenu).map(|config| {
            let chips = config
                .categories
                .iter()
                .enumerate()
                .map(|(i, chip)| {
                    view! { <span class="terminal-menu__chip" class:terminal-menu__chip--active={i == 0}>{*chip}</span> }
                })
                .collect_view();
            let rows = config
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let navigate = navigate.clone();
                    let tone = StatusTone::of(option.status).class();
                    let selected = move || menu.with(|m| m.selection == index);
                    view! {
                        <li>
                            <button
                                class="terminal-menu__option"
                                class:terminal-menu__option--active=selected
                                on:mouseenter=move |_| menu.update(|m| m.hover_option(index))
                                on:focus=move |_| menu.update(|m| m.hover_option(index))
                                on:click=move |_| {
                                    let destination =
                                        menu.try_update(|m| m.select_option(index)).unwrap_or(Destination::Inert);
                                    follow(destination, &navigate);
                                }
                            >
                                <div class="terminal-menu__option-head">
                                    <span>{option.label}</span>
                                    <span class=format!("terminal-menu__status {tone}")>{option.status}</span>
                                </div>
                                <p class="terminal-menu__option-desc">{option.description}</p>
                                {option.category.map(|category| {
                                    view! { <p class="terminal-menu__option-category">{format_category(category)}</p> }
                                })}
                            </button>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="terminal-menu__submenu">
                    <p class="terminal-menu__submenu-title">{config.title}</p>
                    {(!config.categories.is_empty()).then(|| view! { <div class="terminal-menu__chips">{chips}</div> })}
                    <ul class="terminal-menu__options">{rows}</ul>
                    <button class="terminal-menu__back" on:click=move |_| menu.update(MenuState::back)>
                        "< BACK TO MAIN MENU"
                    </button>
                </div>
            }
        })
    };

    let display = Memo::new(move |_| menu.with(MenuState::display));

    view! {
        <div class="terminal-menu scanlines">
            <header class="terminal-menu__header">
                <p class="terminal-menu__division">"KY OPS DIVISION"</p>
                <h1 class="terminal-menu__title">"INTEGRATED APPS"</h1>
                <p class="terminal-menu__build">"Build v0.3"</p>
            </header>
            <div class="terminal-menu__body">
                <nav class="terminal-menu__list">
                    {move || match mode.get() {
                        MenuMode::Main => view! { <ul class="terminal-menu__items">{main_list.clone()}</ul> }.into_any(),
                        MenuMode::Sub(_) => submenu_list().into_any(),
                    }}
                </nav>
                <section class="terminal-menu__briefing">
                    <p class="terminal-menu__briefing-label">{move || display.with(|d| d.label.clone())}</p>
                    <h2 class="terminal-menu__briefing-desc">{move || display.with(|d| d.description.clone())}</h2>
                    <p class="terminal-menu__briefing-detail">{move || display.with(|d| d.detail.clone())}</p>
                    <div class="terminal-menu__briefing-status">
                        <span class="terminal-menu__caret">">"</span>
                        <span>{move || display.with(|d| d.status.clone())}</span>
                    </div>
                </section>
            </div>
            <footer class="terminal-menu__footer">
                <span>{move || menu.with(MenuState::instructions)}</span>
            </footer>
        </div>
    }
}
