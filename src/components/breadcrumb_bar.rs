//! Breadcrumb Bar Component
//!
//! Path from the top level to the current space, with a back button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::hierarchy::{breadcrumb, Crumb};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BreadcrumbBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let crumbs = Memo::new(move |_| {
        let Some(id) = ctx.view_mode.get().cursor() else { return Vec::<Crumb>::new() };
        breadcrumb(&store.spaces().get(), id).unwrap_or_else(|e| {
            log::error!("[APP] cannot build breadcrumb: {}", e);
            Vec::new()
        })
    });

    let go_back = move |_: web_sys::MouseEvent| ctx.go_back(&store.spaces().get_untracked());

    view! {
        <nav class="breadcrumb-bar">
            <Show when=move || ctx.view_mode.get().cursor().is_some()>
                <button class="back-btn" on:click=go_back>"← Back"</button>
            </Show>
            <span class="crumb root" on:click=move |_| ctx.show_list()>"All spaces"</span>
            <For
                each=move || crumbs.get()
                key=|crumb| (crumb.id, crumb.name.clone())
                children=move |crumb| {
                    let id = crumb.id;
                    view! {
                        <span class="crumb-separator">" > "</span>
                        <span
                            class=move || if ctx.view_mode.get().cursor() == Some(id) { "crumb current" } else { "crumb" }
                            on:click=move |_| ctx.select_space(id)
                        >
                            {crumb.name}
                        </span>
                    }
                }
            />
        </nav>
    }
}
