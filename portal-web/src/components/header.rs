//! Page header

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header-container">
            <p class="header">"🖼 GIF Portal"</p>
            <p class="sub-text">"View your GIF collection in the metaverse ✨"</p>
        </div>
    }
}
