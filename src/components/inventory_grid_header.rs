//! Inventory Grid Header Component
//!
//! Include-tags, search and exclude-tags filters in three columns.

use leptos::prelude::*;

use super::{SearchBar, TagMultiSelect};

#[component]
pub fn InventoryGridHeader(
    #[prop(into)] include_tags: Signal<Vec<String>>,
    #[prop(into)] on_include_tags: Callback<Vec<String>>,
    #[prop(into)] exclude_tags: Signal<Vec<String>>,
    #[prop(into)] on_exclude_tags: Callback<Vec<String>>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-tag-container row">
            <div class="col-sm-4">
                <TagMultiSelect
                    extra_class="absolute-bottom"
                    placeholder="Include tags"
                    selected=include_tags
                    on_change=on_include_tags
                />
            </div>
            <div class="col-sm-4">
                <SearchBar extra_class="absolute-bottom" on_input=on_search />
            </div>
            <div class="col-sm-4">
                <TagMultiSelect
                    extra_class="absolute-bottom"
                    placeholder="Exclude tags"
                    selected=exclude_tags
                    on_change=on_exclude_tags
                />
            </div>
        </div>
    }
}
