//! Space Select Component
//!
//! Dropdown of spaces with indented names.

use leptos::prelude::*;

/// `<select>` over (id, indented name) pairs; the empty option is `None`
#[component]
pub fn SpaceSelect(
    #[prop(into)] options: Signal<Vec<(u32, String)>>,
    selected: ReadSignal<Option<u32>>,
    set_selected: WriteSignal<Option<u32>>,
    /// Label of the empty option
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <select
            class="space-select"
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| set_selected.set(event_target_value(&ev).parse::<u32>().ok())
        >
            <option value="">{placeholder}</option>
            <For
                each=move || options.get()
                key=|(id, label)| (*id, label.clone())
                children=move |(id, label)| {
                    view! {
                        <option value=id.to_string() selected=move || selected.get() == Some(id)>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
