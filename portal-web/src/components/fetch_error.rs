use leptos::prelude::*;
use lib_core::AccountView;

use crate::state::session::use_session_context;

/// Shown when the account could not be loaded; offers a manual retry.
#[component]
pub fn FetchErrorNotice() -> impl IntoView {
    let ctx = use_session_context();
    let reason = move || {
        ctx.session.with(|s| match &s.account {
            AccountView::FetchError(reason) => reason.clone(),
            _ => String::new(),
        })
    };

    view! {
        <div class="connected-container">
            <p class="error">{reason}</p>
            <button class="cta-button submit-gif-button" on:click=move |_| ctx.refresh()>
                "Retry"
            </button>
        </div>
    }
}
