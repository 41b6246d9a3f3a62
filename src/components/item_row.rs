//! Item Row Component
//!
//! A draggable item with inline edit of all its fields.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, DndSignals, DragPayload};

use crate::actions;
use crate::components::{options_or_empty, report_error, DeleteConfirmButton, SpaceSelect};
use crate::context::use_app_context;
use crate::hierarchy::indented_options;
use crate::models::Item;
use crate::store::{store_update_item, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemRow(
    item: Item,
    depth: usize,
    dnd: DndSignals,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id;
    let space_id = item.space_id;
    let name = StoredValue::new(item.name);
    let description = StoredValue::new(item.description.unwrap_or_default());
    let indent = depth * 24;

    let (editing, set_editing) = signal(false);
    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_description, set_edit_description) = signal(String::new());
    let (edit_space, set_edit_space) = signal(space_id);

    let space_options = Memo::new(move |_| options_or_empty(indented_options(&store.spaces().get())));

    let on_mousedown = make_on_mousedown(dnd, DragPayload::Item(id));
    let is_dragging = move || dnd.dragging_read.get() == Some(DragPayload::Item(id));

    let row_class = move || if is_dragging() { "item-row dragging" } else { "item-row" };
    let row_style = move || {
        format!("margin-left: {}px; opacity: {};", indent, if is_dragging() { "0.5" } else { "1" })
    };

    let start_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_edit_name.set(name.get_value());
        set_edit_description.set(description.get_value());
        set_edit_space.set(space_id);
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_name = edit_name.get_untracked();
        let new_description = edit_description.get_untracked();
        let new_space = edit_space.get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            match actions::edit_item(&api, id, &new_name, &new_description, new_space).await {
                Ok(updated) => {
                    store_update_item(&store, updated);
                    set_editing.set(false);
                }
                Err(e) => report_error("edit item", &e),
            }
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            match actions::delete_item(&api, id).await {
                Ok(()) => ctx.reload(),
                Err(e) => report_error("delete item", &e),
            }
        });
    });

    view! {
        <div class=row_class style=row_style on:mousedown=on_mousedown>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="item-name">{name.get_value()}</span>
                    <span class="item-description">
                        {move || {
                            let d = description.get_value();
                            if d.is_empty() { "No description".to_string() } else { d }
                        }}
                    </span>
                    <button class="edit-btn" title="Edit" on:click=start_edit>"✎"</button>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        prompt="Delete this item?"
                        on_confirm=on_delete
                    />
                }
            >
                <form class="edit-form" on:submit=save>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || edit_name.get()
                        on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || edit_description.get()
                        on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                    ></textarea>
                    <SpaceSelect
                        options=space_options
                        selected=edit_space
                        set_selected=set_edit_space
                        placeholder="(unassigned)"
                    />
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </form>
            </Show>
        </div>
    }
}
