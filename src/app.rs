//! Space Organizer Frontend App
//!
//! Main application component: command and search bar on top, the
//! space tree (or search results) below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::api::HttpApi;
use crate::components::{
    BreadcrumbBar, CategoryBar, ContainerInfo, NewItemForm, NewSpaceForm, SearchBar, SearchResults, SpaceBrowser,
    VoiceCommand,
};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::hierarchy::find_space;
use crate::navigation::ViewMode;
use crate::store::{store_replace_inventory, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let reload_trigger = signal(0u32);
    let view_mode = signal(ViewMode::default());
    let search_query = signal(String::new());
    let ctx = AppContext::new(HttpApi::new(ApiConfig::default()), reload_trigger, view_mode, search_query);
    provide_context(ctx);

    // Load the inventory on mount and on every reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[APP] Loading inventory, trigger={}", trigger);
        let api = ctx.api();
        spawn_local(async move {
            match actions::fetch_inventory(&api).await {
                Ok(snapshot) => {
                    log::debug!("[APP] Loaded {} spaces, {} items", snapshot.spaces.len(), snapshot.items.len());
                    store_replace_inventory(&store, snapshot);
                    // The open space may have been deleted or moved away
                    if let Some(id) = ctx.view_mode.get_untracked().cursor() {
                        if find_space(&store.spaces().get_untracked(), id).is_none() {
                            ctx.show_list();
                        }
                    }
                }
                Err(e) => log::error!("[APP] Failed to load inventory: {}", e),
            }
        });
    });

    let searching = move || !ctx.search_query.get().trim().is_empty();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Space Organizer"</h1>
                <SearchBar />
                <CategoryBar />
            </header>

            <main class="main-content">
                <VoiceCommand />

                <Show when=searching>
                    <SearchResults />
                </Show>

                <div class="browser-pane" style:display=move || if searching() { "none" } else { "block" }>
                    <BreadcrumbBar />
                    <ContainerInfo />
                    <div class="create-forms">
                        <NewSpaceForm />
                        <NewItemForm />
                    </div>
                    <SpaceBrowser />
                </div>

                <p class="item-count">
                    {move || format!("{} spaces, {} items", store.spaces().get().len(), store.items().get().len())}
                </p>
            </main>
        </div>
    }
}
