//! The single portal page: header plus whichever container the session phase calls for.

use leptos::prelude::*;
use lib_core::{Session, SessionPhase};

use crate::components::{
    ConnectWalletButton, FetchErrorNotice, GifForm, GifGrid, Header, InitializeAccountButton,
};
use crate::state::session::use_session_context;

/// What the page body depends on: the phase, and during `Connecting`
/// whether the wallet already answered.
fn view_key(session: &Session) -> (SessionPhase, bool) {
    (session.phase(), session.wallet_address.is_some())
}

#[component]
pub fn PortalPage() -> impl IntoView {
    let ctx = use_session_context();
    // Typing only touches `input_value`, which must not rebuild the branch below
    let phase = Memo::new(move |_| ctx.session.with(view_key));
    let connected = move || phase.with(|(p, _)| p.is_connected());

    view! {
        <div class=move || if connected() { "authed-container" } else { "container" }>
            <Header/>
            {move || match phase.get() {
                (SessionPhase::Disconnected, _) => view! { <ConnectWalletButton/> }.into_any(),
                (SessionPhase::Connecting, has_address) => {
                    if has_address {
                        view! { <p class="sub-text">"Loading GIFs..."</p> }.into_any()
                    } else {
                        view! { <ConnectWalletButton/> }.into_any()
                    }
                }
                (SessionPhase::ConnectedUninitialized, _) => {
                    view! { <InitializeAccountButton/> }.into_any()
                }
                (SessionPhase::ConnectedReady, _) => view! {
                    <div class="connected-container">
                        <GifForm/>
                        <GifGrid/>
                    </div>
                }
                .into_any(),
                (SessionPhase::ConnectedFetchFailed, _) => view! { <FetchErrorNotice/> }.into_any(),
            }}
        </div>
    }
}
