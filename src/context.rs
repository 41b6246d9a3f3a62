//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::models::Space;
use crate::navigation::ViewMode;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the inventory - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the inventory - write
    set_reload_trigger: WriteSignal<u32>,
    /// List or detail view - read
    pub view_mode: ReadSignal<ViewMode>,
    /// List or detail view - write
    set_view_mode: WriteSignal<ViewMode>,
    /// Search box contents - read
    pub search_query: ReadSignal<String>,
    /// Search box contents - write
    set_search_query: WriteSignal<String>,
    /// Backend client
    api: StoredValue<HttpApi, LocalStorage>,
}

impl AppContext {
    pub fn new(
        api: HttpApi,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        view_mode: (ReadSignal<ViewMode>, WriteSignal<ViewMode>),
        search_query: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            view_mode: view_mode.0,
            set_view_mode: view_mode.1,
            search_query: search_query.0,
            set_search_query: search_query.1,
            api: StoredValue::new_local(api),
        }
    }

    /// Backend client handle
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    /// Trigger a full refetch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Move the cursor into a space
    pub fn select_space(&self, id: u32) {
        self.set_view_mode.set(ViewMode::select(id));
    }

    pub fn show_list(&self) {
        self.set_view_mode.set(ViewMode::List);
    }

    /// Up one level (parent space or list)
    pub fn go_back(&self, spaces: &[Space]) {
        let next = self.view_mode.get_untracked().back(spaces);
        self.set_view_mode.set(next);
    }

    pub fn set_search(&self, query: String) {
        self.set_search_query.set(query);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
