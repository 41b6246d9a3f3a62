//! Space Browser Component
//!
//! Displays spaces and their items as a tree with drag-and-drop support.
//! Dropping on a space moves the dragged entity into it; the top-level
//! zone detaches it. Resting on a space opens it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{report_error, ItemRow, SpaceRow};
use crate::context::use_app_context;
use crate::hierarchy::{flatten_rows, items_in, TreeRow};
use crate::reorganize;
use crate::store::{use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Key covering every field a row renders, so edits re-render the row
fn row_key(row: &TreeRow) -> String {
    match row {
        TreeRow::Space { space, depth } => {
            format!("s{}:{}:{:?}:{}", space.id, depth, space.parent_id, space.name)
        }
        TreeRow::Item { item, depth } => format!(
            "i{}:{}:{:?}:{}:{}",
            item.id,
            depth,
            item.space_id,
            item.name,
            item.description.as_deref().unwrap_or_default()
        ),
    }
}

#[component]
pub fn SpaceBrowser() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |payload, target| {
        let spaces = store.spaces().get_untracked();
        let api = ctx.api();
        log::debug!("[DND] Drop: {:?} -> {:?}", payload, target);
        spawn_local(async move {
            match reorganize::relocate(&api, &spaces, payload, target).await {
                Ok(Some(_)) => {
                    log::debug!("[DND] Backend done, reloading...");
                    ctx.reload();
                }
                Ok(None) => {}
                Err(e) => report_error("move", &e),
            }
        });
    });

    let on_hover = Callback::new(move |id: u32| {
        log::debug!("[DND] Hover-open space {}", id);
        ctx.select_space(id);
    });

    let rows = Memo::new(move |_| {
        let cursor = ctx.view_mode.get().cursor();
        flatten_rows(&store.spaces().get(), &store.items().get(), cursor).unwrap_or_else(|e| {
            log::error!("[APP] cannot render spaces: {}", e);
            Vec::new()
        })
    });

    let unassigned = Memo::new(move |_| {
        items_in(&store.items().get(), None).into_iter().cloned().collect::<Vec<_>>()
    });

    let is_list = move || ctx.view_mode.get().cursor().is_none();
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let on_top_level_enter = make_on_top_level_mouseenter(dnd);
    let on_top_level_leave = make_on_mouseleave(dnd);
    let top_level_class = move || {
        let mut c = String::from("drop-zone top-level");
        if dnd.drop_target_read.get() == Some(DropTarget::TopLevel) {
            c.push_str(" active");
        }
        c
    };

    view! {
        <div class="space-browser">
            <Show when=move || is_list() && is_dragging()>
                <div class=top_level_class on:mouseenter=on_top_level_enter on:mouseleave=on_top_level_leave>
                    "Drop here to move to top level"
                </div>
            </Show>

            <Show
                when=move || !rows.get().is_empty()
                fallback=move || view! {
                    <p class="empty-state">
                        {move || if is_list() { "No spaces yet. Create one above." } else { "This space is empty." }}
                    </p>
                }
            >
                <For
                    each=move || rows.get()
                    key=row_key
                    children=move |row| match row {
                        TreeRow::Space { space, depth } => view! {
                            <SpaceRow space=space depth=depth dnd=dnd on_hover=on_hover />
                        }
                        .into_any(),
                        TreeRow::Item { item, depth } => view! {
                            <ItemRow item=item depth=depth dnd=dnd />
                        }
                        .into_any(),
                    }
                />
            </Show>

            <Show when=move || is_list() && !unassigned.get().is_empty()>
                <h3 class="section-title">"Unassigned items"</h3>
                <For
                    each=move || unassigned.get()
                    key=|item| {
                        (item.id, item.name.clone(), item.description.clone(), item.space_id)
                    }
                    children=move |item| view! { <ItemRow item=item depth=0 dnd=dnd /> }
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, Space};

    #[test]
    fn test_row_key_changes_with_rendered_fields() {
        let item = Item { id: 1, name: "Drill".into(), description: None, space_id: Some(2) };
        let before = row_key(&TreeRow::Item { item: item.clone(), depth: 1 });
        let renamed = row_key(&TreeRow::Item { item: Item { name: "Hammer".into(), ..item.clone() }, depth: 1 });
        let moved = row_key(&TreeRow::Item { item: Item { space_id: Some(3), ..item }, depth: 1 });
        assert_ne!(before, renamed);
        assert_ne!(before, moved);
    }

    #[test]
    fn test_row_key_distinguishes_items_from_spaces() {
        let space = Space { id: 1, name: "A".into(), parent_id: None, depth: 0, children: Vec::new() };
        let item = Item { id: 1, name: "A".into(), description: None, space_id: None };
        assert_ne!(
            row_key(&TreeRow::Space { space, depth: 0 }),
            row_key(&TreeRow::Item { item, depth: 0 })
        );
    }
}
