use leptos::prelude::*;

use crate::state::session::use_session_context;

#[component]
pub fn ConnectWalletButton() -> impl IntoView {
    let ctx = use_session_context();
    let connecting = move || ctx.session.with(|s| s.connecting);

    view! {
        <button
            class="cta-button connect-wallet-button"
            disabled=connecting
            on:click=move |_| ctx.connect()
        >
            {move || if connecting() { "Connecting..." } else { "Connect to Wallet" }}
        </button>
    }
}
