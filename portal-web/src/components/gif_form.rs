use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::session::use_session_context;

#[component]
pub fn GifForm() -> impl IntoView {
    let ctx = use_session_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form on:submit=on_submit>
            <input
                type="text"
                placeholder="Enter gif link!"
                prop:value=move || ctx.session.with(|s| s.input_value.clone())
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <button type="submit" class="cta-button submit-gif-button">
                "Submit"
            </button>
        </form>
    }
}
