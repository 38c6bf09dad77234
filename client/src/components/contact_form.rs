//! Contact form posting to the server's mail relay.

use leptos::prelude::*;

use crate::state::contact::{ContactForm, Field, SubmitStatus};

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactForm>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(&request).await;
            if let Err(e) = &result {
                log::warn!("contact submit failed: {e}");
            }
            form.update(|f| f.finish(result));
        });
        #[cfg(not(feature = "hydrate"))]
        drop(request);
    };

    let bind = move |field: Field| move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    view! {
        <div class="contact">
            <h2 class="contact__title">"Open a Channel"</h2>
            <form class="contact__form" on:submit=on_submit>
                <input
                    class="contact__input"
                    type="text"
                    name="name"
                    placeholder="Name"
                    required
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=bind(Field::Name)
                />
                <input
                    class="contact__input"
                    type="email"
                    name="email"
                    placeholder="Email"
                    required
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=bind(Field::Email)
                />
                <textarea
                    class="contact__input contact__input--message"
                    name="message"
                    rows="5"
                    placeholder="Message"
                    required
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=bind(Field::Message)
                ></textarea>
                <button class="contact__submit" type="submit" disabled=move || form.with(ContactForm::is_sending)>
                    {move || form.with(ContactForm::button_label)}
                </button>
            </form>
            {move || match form.with(|f| f.status.clone()) {
                SubmitStatus::Sent => Some(view! { <p class="contact__status contact__status--ok">"Message sent!"</p> }.into_any()),
                SubmitStatus::Failed(message) => {
                    Some(view! { <p class="contact__status contact__status--error">{message}</p> }.into_any())
                }
                SubmitStatus::Idle | SubmitStatus::Sending => None,
            }}
        </div>
    }
}
