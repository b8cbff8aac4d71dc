//! Select Filter Component
//!
//! Single-value dropdown over fixed options.

use leptos::prelude::*;

/// Dropdown reporting the chosen option value
#[component]
pub fn SelectFilter(
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <select
            class="select-filter"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {placeholder.map(|text| view! { <option value="" disabled=true>{text}</option> })}
            {options.into_iter().map(|(val, label)| {
                let val_for_selected = val.clone();
                view! {
                    <option value=val selected=move || value.get() == val_for_selected>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
