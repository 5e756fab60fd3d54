use leptos::prelude::*;

use crate::state::session::use_session_context;

/// Offered only while the base account does not exist.
#[component]
pub fn InitializeAccountButton() -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <div class="connected-container">
            <button
                class="cta-button submit-gif-button"
                on:click=move |_| ctx.initialize_account()
            >
                "Do One-Time Initialization For GIF Program Account"
            </button>
        </div>
    }
}
