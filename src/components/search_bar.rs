//! Search Bar Component

use leptos::prelude::*;

/// Text input reporting every edit
#[component]
pub fn SearchBar(
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] extra_class: Option<String>,
) -> impl IntoView {
    let class = format!("search-bar {}", extra_class.unwrap_or_default());
    let placeholder = placeholder.unwrap_or_else(|| "Search items...".to_string());

    view! {
        <input
            type="search"
            class=class
            placeholder=placeholder
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
