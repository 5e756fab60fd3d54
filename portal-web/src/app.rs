//! GIF Portal - Leptos Frontend

use leptos::ev;
use leptos::prelude::*;

use crate::pages::PortalPage;
use crate::state::session::{build_controller, provide_session_context, SessionContext};

#[component]
pub fn App() -> impl IntoView {
    match build_controller() {
        Ok(controller) => {
            let ctx = provide_session_context(controller);
            run_startup_check(ctx);
            view! {
                <div class="App">
                    <PortalPage/>
                </div>
            }
            .into_any()
        }
        Err(err) => {
            log::error!("Portal configuration is invalid: {}", err);
            view! { <ConfigError message=err.user_message()/> }.into_any()
        }
    }
}

/// Silent reconnect once the page has loaded.
///
/// The wallet extension injects `window.solana` before `load` fires; if the
/// document is already complete the check runs right away.
fn run_startup_check(ctx: SessionContext) {
    if is_document_complete(&document().ready_state()) {
        ctx.check_existing_session();
        return;
    }

    let handle = window_event_listener(ev::load, move |_| ctx.check_existing_session());
    on_cleanup(move || handle.remove());
}

/// `document.readyState` reports `"complete"` once `load` has fired.
fn is_document_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[component]
fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="App">
            <div class="container">
                <div class="header-container">
                    <p class="header">"🖼 GIF Portal"</p>
                    <p class="error">{message}</p>
                </div>
            </div>
        </div>
    }
}
