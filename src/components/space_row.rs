//! Space Row Component
//!
//! A space in the tree: draggable, a drop target, and inline editable
//! (rename and move to another parent).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::actions;
use crate::components::{options_or_empty, report_error, DeleteConfirmButton, SpaceSelect};
use crate::context::use_app_context;
use crate::hierarchy::{items_in, reparent_options};
use crate::models::Space;
use crate::reorganize;
use crate::store::{store_update_space, use_app_store, AppStateStoreFields};

#[component]
pub fn SpaceRow(
    space: Space,
    depth: usize,
    dnd: DndSignals,
    /// Fired when a drag rests on this row
    on_hover: Callback<u32>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = space.id;
    let parent_id = space.parent_id;
    let name = StoredValue::new(space.name);
    let indent = depth * 24;

    let (editing, set_editing) = signal(false);
    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_parent, set_edit_parent) = signal(parent_id);

    let parent_options = Memo::new(move |_| options_or_empty(reparent_options(&store.spaces().get(), id)));
    let item_count = Memo::new(move |_| items_in(&store.items().get(), Some(id)).len());

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, DragPayload::Space(id));
    let on_mouseenter = make_on_space_mouseenter(dnd, id, on_hover);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let is_dragging = move || dnd.dragging_read.get() == Some(DragPayload::Space(id));
    let is_drop_target = move || dnd.drop_target_read.get() == Some(DropTarget::Space(id));
    let is_current = move || ctx.view_mode.get().cursor() == Some(id);

    let row_class = move || {
        let mut c = String::from("space-row");
        if is_current() { c.push_str(" current"); }
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };
    let row_style = move || {
        format!("margin-left: {}px; opacity: {};", indent, if is_dragging() { "0.5" } else { "1" })
    };

    let start_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_edit_name.set(name.get_value());
        set_edit_parent.set(parent_id);
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_name = edit_name.get_untracked();
        let new_parent = edit_parent.get_untracked();
        let spaces = store.spaces().get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            match actions::edit_space(&api, id, &new_name).await {
                Ok(updated) => store_update_space(&store, updated),
                Err(e) => {
                    report_error("edit space", &e);
                    return;
                }
            }
            if new_parent != parent_id {
                let target = new_parent.map(DropTarget::Space).unwrap_or(DropTarget::TopLevel);
                match reorganize::relocate(&api, &spaces, DragPayload::Space(id), target).await {
                    Ok(_) => ctx.reload(),
                    Err(e) => report_error("move space", &e),
                }
            }
            set_editing.set(false);
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            match actions::delete_space(&api, id).await {
                Ok(()) => ctx.reload(),
                Err(e) => report_error("delete space", &e),
            }
        });
    });

    let open = move |_: web_sys::MouseEvent| {
        // A drop also ends with a click on the row under the pointer
        if !dnd.drag_just_ended_read.get_untracked() {
            ctx.select_space(id);
        }
    };

    view! {
        <div
            class=row_class
            style=row_style
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="space-icon">"▣"</span>
                    <span class="space-name" on:click=open>{name.get_value()}</span>
                    <span class="space-item-count">{move || item_count.get()}</span>
                    <button class="edit-btn" title="Edit" on:click=start_edit>"✎"</button>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        prompt="Delete this space with all nested spaces and items?"
                        on_confirm=on_delete
                    />
                }
            >
                <form class="edit-form" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || edit_name.get()
                        on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                    />
                    <SpaceSelect
                        options=parent_options
                        selected=edit_parent
                        set_selected=set_edit_parent
                        placeholder="(top level)"
                    />
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </form>
            </Show>
        </div>
    }
}
