//! Tag Multi-Select Component
//!
//! Chip list of selected tags plus a fuzzy-search input over the shared tag list.
//! Only known tags can be selected; every change reports the whole selection.

use leptos::prelude::*;

use crate::models::Tag;
use crate::store::{use_app_store, AppStateStoreFields};

const MAX_SUGGESTIONS: usize = 6;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

/// Tags matching `query` that are not already selected
pub fn suggest(all_tags: &[Tag], query: &str, selected: &[String]) -> Vec<Tag> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }
    all_tags
        .iter()
        .filter(|tag| !selected.contains(&tag.name))
        .filter(|tag| fuzzy_match(query, &tag.name))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Selection with `name` appended, unless already present
pub fn add_tag(selected: &[String], name: &str) -> Vec<String> {
    let mut next = selected.to_vec();
    if !next.iter().any(|t| t == name) {
        next.push(name.to_string());
    }
    next
}

pub fn remove_tag(selected: &[String], name: &str) -> Vec<String> {
    selected.iter().filter(|t| *t != name).cloned().collect()
}

/// Tag multi-select
///
/// Props:
/// - selected: current selection, owned by the parent
/// - on_change: receives the full new selection
#[component]
pub fn TagMultiSelect(
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<Vec<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] extra_class: Option<String>,
) -> impl IntoView {
    let store = use_app_store();
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || suggest(&store.tags().get(), &input_value.get(), &selected.get());

    let pick = move |name: String| {
        on_change.run(add_tag(&selected.get_untracked(), &name));
        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Enter" | "Tab" => {
                if let Some(tag) = sugg.get(selected_idx.get()) {
                    ev.prevent_default();
                    pick(tag.name.clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Backspace" if input_value.get().is_empty() => {
                let current = selected.get();
                if let Some(last) = current.last() {
                    on_change.run(remove_tag(&current, last));
                }
            }
            _ => {}
        }
    };

    let wrapper_class = format!("tag-multi-select {}", extra_class.unwrap_or_default());
    let placeholder = placeholder.unwrap_or_else(|| "Select tags...".to_string());

    view! {
        <div class=wrapper_class>
            <div class="tag-chips">
                <For
                    each=move || selected.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let name_for_remove = name.clone();
                        view! {
                            <span class="tag-chip">
                                {name}
                                <button
                                    type="button"
                                    class="tag-chip-remove"
                                    on:click=move |_| {
                                        on_change.run(remove_tag(&selected.get_untracked(), &name_for_remove));
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
                <input
                    type="text"
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                    }
                    on:keydown=on_keydown
                />
            </div>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    None
                } else {
                    let selected_at = selected_idx.get();
                    Some(view! {
                        <div class="autocomplete-list">
                            {sugg.into_iter().enumerate().map(|(i, tag)| {
                                let name = tag.name.clone();
                                let name_for_click = name.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=if i == selected_at { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            pick(name_for_click.clone());
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    })
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<Tag> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Tag { id: i as u32 + 1, name: n.to_string() })
            .collect()
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("osc", "Oscilloscope"));
        assert!(fuzzy_match("ope", "Oscilloscope"));
        assert!(!fuzzy_match("xyz", "Oscilloscope"));
        assert!(fuzzy_match("", "anything"));
    }

    #[test]
    fn test_suggest_skips_selected() {
        let all = tags(&["lab", "laptop", "cable"]);
        let sugg = suggest(&all, "la", &["lab".to_string()]);
        let names: Vec<_> = sugg.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["laptop"]);
    }

    #[test]
    fn test_suggest_empty_query() {
        assert!(suggest(&tags(&["lab"]), "  ", &[]).is_empty());
    }

    #[test]
    fn test_suggest_limit() {
        let all = tags(&["a1", "a2", "a3", "a4", "a5", "a6", "a7"]);
        assert_eq!(suggest(&all, "a", &[]).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_add_and_remove() {
        let selected = add_tag(&[], "lab");
        let selected = add_tag(&selected, "lab");
        assert_eq!(selected, vec!["lab".to_string()]);
        let selected = add_tag(&selected, "tools");
        assert_eq!(remove_tag(&selected, "lab"), vec!["tools".to_string()]);
    }
}
