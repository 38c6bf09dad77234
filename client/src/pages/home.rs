//! Landing page: terminal menu plus contact form.

use leptos::prelude::*;

use crate::components::contact_form::ContactFormPanel;
use crate::components::navigation::Navigation;
use crate::components::terminal_menu::TerminalMenu;

#[component]
pub fn HomePage() -> impl IntoView {
    // Deep links like `/#home` scroll once mounted and on every later hash change.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(crate::util::scroll::scroll_to_location_hash);
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            crate::util::scroll::scroll_to_location_hash();
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="home">
            <Navigation/>
            <main>
                <section id="home" class="home__hero">
                    <TerminalMenu/>
                </section>
                <section id="contact" class="home__contact">
                    <ContactFormPanel/>
                </section>
            </main>
            <footer class="home__footer">
                <p>"\u{a9} KyLife"</p>
            </footer>
        </div>
    }
}
