//! Category Bar Component
//!
//! Category chips; clicking one searches for it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match actions::fetch_category_names(&api).await {
                Ok(names) => store.categories().set(names),
                Err(e) => log::warn!("[APP] cannot load categories: {}", e),
            }
        });
    });

    view! {
        <Show when=move || !store.categories().get().is_empty()>
            <div class="category-bar">
                <For
                    each=move || store.categories().get()
                    key=|name| name.clone()
                    children=move |name| {
                        let query = name.clone();
                        let label = name.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if ctx.search_query.get() == name { "category-chip active" } else { "category-chip" }
                                }
                                on:click=move |_| ctx.set_search(query.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
