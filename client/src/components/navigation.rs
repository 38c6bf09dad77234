//! Fixed top navigation bar.

use leptos::prelude::*;

/// Scroll offset past which the bar switches to its solid style.
#[cfg(feature = "hydrate")]
const SCROLLED_THRESHOLD: f64 = 50.0;

pub const GITHUB_URL: &str = "https://github.com/k9Doge3";
pub const CONTACT_MAILTO: &str = "mailto:ky.group.solutions@gmail.com";

#[component]
pub fn Navigation() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let past = offset > SCROLLED_THRESHOLD;
            if scrolled.get_untracked() != past {
                scrolled.set(past);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        crate::util::scroll::go_to_hash("home");
    };

    view! {
        <nav class="site-nav" class:site-nav--scrolled=move || scrolled.get()>
            <div class="site-nav__inner">
                <a class="site-nav__logo" href="/">"> KYLIFE"</a>
                <button
                    class="site-nav__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <div class="site-nav__links" class:site-nav__links--open=move || menu_open.get()>
                    <a class="site-nav__link" href="#home" on:click=on_home>"Home"</a>
                    <a class="site-nav__icon" href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        "GitHub"
                    </a>
                    <a class="site-nav__icon" href=CONTACT_MAILTO aria-label="Email">"Email"</a>
                </div>
            </div>
        </nav>
    }
}
