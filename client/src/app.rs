//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{basement::BasementPage, home::HomePage};
use crate::state::{contact::ContactForm, menu::MenuState, tracker::TrackerState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let menu = RwSignal::new(MenuState::default());
    let contact = RwSignal::new(ContactForm::default());
    let tracker = RwSignal::new(TrackerState::default());

    provide_context(menu);
    provide_context(contact);
    provide_context(tracker);

    view! {
        <Stylesheet id="leptos" href="/pkg/kylife.css"/>
        <Title text="KyLife"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("basement") view=BasementPage/>
            </Routes>
        </Router>
    }
}
