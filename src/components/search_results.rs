//! Search Results Component
//!
//! Result cards for the current query. Clicking a card opens the space
//! it refers to (or the space holding the item) and clears the query.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::search::{search, SearchHit};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchResults() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let hits = Memo::new(move |_| {
        search(&store.spaces().get(), &store.items().get(), &ctx.search_query.get())
    });

    let open = move |target: Option<u32>| {
        match target {
            Some(id) => ctx.select_space(id),
            None => ctx.show_list(),
        }
        ctx.set_search(String::new());
    };

    view! {
        <div class="search-results">
            <Show
                when=move || !hits.get().is_empty()
                fallback=|| view! {
                    <p class="empty-state">"No results found. Please refine your search query."</p>
                }
            >
                <For
                    each=move || hits.get()
                    key=|hit| hit.key()
                    children=move |hit| match hit {
                        SearchHit::Item { item, location } => {
                            let target = item.space_id;
                            view! {
                                <div class="result-card item" on:click=move |_| open(target)>
                                    <span class="result-kind">"Item"</span>
                                    <span class="result-name">{item.name}</span>
                                    <span class="result-description">{item.description.unwrap_or_default()}</span>
                                    <span class="result-location">
                                        {location.unwrap_or_else(|| "Unassigned".to_string())}
                                    </span>
                                </div>
                            }
                            .into_any()
                        }
                        SearchHit::Space { space, location } => {
                            let target = Some(space.id);
                            view! {
                                <div class="result-card space" on:click=move |_| open(target)>
                                    <span class="result-kind">"Space"</span>
                                    <span class="result-name">{space.name}</span>
                                    <span class="result-location">
                                        {location.unwrap_or_else(|| "Top level".to_string())}
                                    </span>
                                </div>
                            }
                            .into_any()
                        }
                    }
                />
            </Show>
        </div>
    }
}
