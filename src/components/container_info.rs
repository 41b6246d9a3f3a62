//! Container Info Component
//!
//! Backend details for the space currently open in detail view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, SpaceDetails};
use crate::context::use_app_context;
use crate::error::ApiError;

/// Panel contents after a reply for `requested`, or `None` when the user
/// already left that space (success and failure alike).
fn settle(
    cursor: Option<u32>,
    requested: u32,
    result: Result<SpaceDetails, ApiError>,
) -> Option<Option<SpaceDetails>> {
    (cursor == Some(requested)).then(|| result.ok())
}

#[component]
pub fn ContainerInfo() -> impl IntoView {
    let ctx = use_app_context();
    let (details, set_details) = signal::<Option<SpaceDetails>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(id) = ctx.view_mode.get().cursor() else {
            set_details.set(None);
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = actions::fetch_space_details(&api, id).await;
            if let Err(e) = &result {
                log::error!("[APP] cannot load details of space {}: {}", id, e);
            }
            if let Some(next) = settle(ctx.view_mode.get_untracked().cursor(), id, result) {
                set_details.set(next);
            }
        });
    });

    view! {
        {move || details.get().map(|d| view! {
            <div class="container-info">
                <span class="container-location">
                    {d.default_location.unwrap_or_else(|| "No default location".to_string())}
                </span>
                <span class="container-counts">
                    {format!("{} sub-spaces, {} items", d.child_spaces, d.items)}
                </span>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeout() -> ApiError {
        ApiError::Timeout { endpoint: "GET /containers/1".into(), timeout_ms: 5000 }
    }

    #[test]
    fn test_reply_for_current_space_applies() {
        let details = SpaceDetails { default_location: Some("Basement".into()), child_spaces: 2, items: 3 };
        assert_eq!(settle(Some(1), 1, Ok(details.clone())), Some(Some(details)));
        assert_eq!(settle(Some(1), 1, Err(timeout())), Some(None));
    }

    #[test]
    fn test_stale_failure_keeps_current_panel() {
        assert_eq!(settle(Some(2), 1, Err(timeout())), None);
        assert_eq!(settle(None, 1, Err(timeout())), None);
        assert_eq!(settle(Some(2), 1, Ok(SpaceDetails::default())), None);
    }
}
