//! Grid of submitted GIFs, each captioned with its submitter.

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::state::session::use_session_context;

#[component]
pub fn GifGrid() -> impl IntoView {
    let ctx = use_session_context();
    let items = move || ctx.session.with(|s| s.items().to_vec());

    view! {
        <p class="gif-count">
            {move || match ctx.session.with(|s| s.items().len()) {
                1 => "1 GIF".to_string(),
                n => format!("{} GIFs", n),
            }}
        </p>
        <div class="gif-grid">
            {move || {
                items()
                    .into_iter()
                    .map(|item| {
                        let link = ctx.explorer_link(&item.user_address);
                        let short = truncate_address(&item.user_address);
                        view! {
                            <div class="gif-item">
                                <figure>
                                    <img src=item.gif_link.clone() alt=item.gif_link />
                                    <figcaption class="fig-item">
                                        <a href=link target="_blank" title=item.user_address>
                                            {short}
                                        </a>
                                    </figcaption>
                                </figure>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
