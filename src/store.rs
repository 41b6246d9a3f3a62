//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::Snapshot;
use crate::models::{Item, Space};

/// Last fetched copy of the backend's inventory
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat space list (each carries its parent reference)
    pub spaces: Vec<Space>,
    /// All items
    pub items: Vec<Item>,
    /// Category names for the filter chips
    pub categories: Vec<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace both collections with a fresh fetch
pub fn store_replace_inventory(store: &AppStore, snapshot: Snapshot) {
    store.spaces().set(snapshot.spaces);
    store.items().set(snapshot.items);
}

/// Merge an item returned by an update
pub fn store_update_item(store: &AppStore, updated_item: Item) {
    if let Some(item) = store.items().write().iter_mut().find(|item| item.id == updated_item.id) {
        *item = updated_item;
    }
}

/// Merge a space returned by an update (keeps the known parent if the
/// backend left it out)
pub fn store_update_space(store: &AppStore, updated_space: Space) {
    if let Some(space) = store.spaces().write().iter_mut().find(|space| space.id == updated_space.id) {
        let parent_id = updated_space.parent_id.or(space.parent_id);
        *space = Space { parent_id, children: Vec::new(), ..updated_space };
    }
}
