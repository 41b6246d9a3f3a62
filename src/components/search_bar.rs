//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search items and spaces..."
                prop:value=move || ctx.search_query.get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
            <Show when=move || !ctx.search_query.get().is_empty()>
                <button class="clear-btn" title="Clear" on:click=move |_| ctx.set_search(String::new())>
                    "×"
                </button>
            </Show>
        </div>
    }
}
