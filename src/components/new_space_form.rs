//! New Space Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{options_or_empty, report_error, SpaceSelect};
use crate::context::use_app_context;
use crate::hierarchy::indented_options;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating a space, top-level or under a chosen parent
#[component]
pub fn NewSpaceForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (parent, set_parent) = signal::<Option<u32>>(None);

    // New spaces default to the one being viewed
    Effect::new(move |_| set_parent.set(ctx.view_mode.get().cursor()));

    let parent_options = Memo::new(move |_| options_or_empty(indented_options(&store.spaces().get())));

    let create_space = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        let parent_id = parent.get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            match actions::create_space(&api, &name, parent_id).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    ctx.reload();
                }
                Err(e) => report_error("create space", &e),
            }
        });
    };

    view! {
        <form class="new-space-form" on:submit=create_space>
            <input
                type="text"
                placeholder="New space name..."
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <SpaceSelect
                options=parent_options
                selected=parent
                set_selected=set_parent
                placeholder="(top level)"
            />
            <button type="submit">"Add space"</button>
        </form>
    }
}
