//! UI Components
//!
//! Reusable Leptos components.

mod breadcrumb_bar;
mod category_bar;
mod container_info;
mod delete_confirm_button;
mod item_row;
mod new_item_form;
mod new_space_form;
mod search_bar;
mod search_results;
mod space_browser;
mod space_row;
mod space_select;
mod voice_command;

pub use breadcrumb_bar::BreadcrumbBar;
pub use category_bar::CategoryBar;
pub use container_info::ContainerInfo;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use new_space_form::NewSpaceForm;
pub use search_bar::SearchBar;
pub use search_results::SearchResults;
pub use space_browser::SpaceBrowser;
pub use space_row::SpaceRow;
pub use space_select::SpaceSelect;
pub use voice_command::VoiceCommand;

use crate::error::{ActionError, HierarchyError};

/// Client-side rejections block with an alert; everything else is logged
/// and swallowed (the view stays as it was until the next fetch).
pub(crate) fn report_error(action: &str, err: &ActionError) {
    match err {
        ActionError::Validation(_) | ActionError::WouldCreateCycle { .. } => {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&err.to_string());
            }
        }
        other => log::error!("[APP] {} failed: {}", action, other),
    }
}

/// Dropdown options, or none if the hierarchy is broken
pub(crate) fn options_or_empty(result: Result<Vec<(u32, String)>, HierarchyError>) -> Vec<(u32, String)> {
    result.unwrap_or_else(|e| {
        log::error!("[APP] cannot list spaces: {}", e);
        Vec::new()
    })
}
