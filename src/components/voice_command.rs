//! Voice Command Component
//!
//! Free-text command box. The backend interprets the text; mutating
//! commands trigger a refetch and lookups fill the search box.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::error::ActionError;
use crate::models::EntityKind;

const OBJECT_TYPES: &[(EntityKind, &str)] = &[(EntityKind::Item, "Item"), (EntityKind::Space, "Space")];

#[component]
pub fn VoiceCommand() -> impl IntoView {
    let ctx = use_app_context();

    let (text, set_text) = signal(String::new());
    let (object_type, set_object_type) = signal(EntityKind::Item);
    let (response, set_response) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let interpret = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let command = text.get_untracked();
        let kind = object_type.get_untracked();
        let api = ctx.api();

        set_busy.set(true);
        set_response.set("Interpreting command...".to_string());
        spawn_local(async move {
            match actions::interpret_command(&api, &command, kind).await {
                Ok(outcome) => {
                    set_response.set(outcome.message.clone());
                    if outcome.needs_reload() {
                        ctx.reload();
                    }
                    if let Some(name) = outcome.lookup {
                        ctx.set_search(name);
                    }
                }
                Err(ActionError::Validation(e)) => set_response.set(e.to_string()),
                Err(e) => {
                    log::error!("[VOICE] interpret failed: {}", e);
                    set_response.set("An error occurred. See console for details.".to_string());
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="voice-command" on:submit=interpret>
            <textarea
                placeholder="e.g. Move the drill to the garage shelf"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <div class="voice-controls">
                <select
                    prop:value=move || object_type.get().as_query()
                    on:change=move |ev| {
                        let kind = if event_target_value(&ev) == EntityKind::Space.as_query() {
                            EntityKind::Space
                        } else {
                            EntityKind::Item
                        };
                        set_object_type.set(kind);
                    }
                >
                    {OBJECT_TYPES.iter().map(|(kind, label)| view! {
                        <option value=kind.as_query()>{*label}</option>
                    }).collect_view()}
                </select>
                <button type="submit" disabled=move || busy.get()>"Interpret"</button>
            </div>
            <Show when=move || !response.get().is_empty()>
                <p class="voice-response">{move || response.get()}</p>
            </Show>
        </form>
    }
}
