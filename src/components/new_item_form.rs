//! New Item Form Component
//!
//! Form for creating items with an optional description and space.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{options_or_empty, report_error, SpaceSelect};
use crate::context::use_app_context;
use crate::hierarchy::indented_options;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());
    let (space, set_space) = signal::<Option<u32>>(None);

    Effect::new(move |_| set_space.set(ctx.view_mode.get().cursor()));

    let space_options = Memo::new(move |_| options_or_empty(indented_options(&store.spaces().get())));

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        let description = new_description.get_untracked();
        let space_id = space.get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            match actions::create_item(&api, &name, &description, space_id).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    set_new_description.set(String::new());
                    ctx.reload();
                }
                Err(e) => report_error("create item", &e),
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="New item name..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <SpaceSelect
                    options=space_options
                    selected=space
                    set_selected=set_space
                    placeholder="(unassigned)"
                />
                <button type="submit">"Add item"</button>
            </div>
            <input
                type="text"
                class="description-input"
                placeholder="Description (optional)"
                prop:value=move || new_description.get()
                on:input=move |ev| set_new_description.set(event_target_value(&ev))
            />
        </form>
    }
}
