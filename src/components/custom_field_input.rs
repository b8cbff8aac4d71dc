//! Custom Field Input Component
//!
//! Renders one custom field descriptor as a labelled input.

use leptos::prelude::*;

use crate::models::FieldType;

/// How a field type is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
    Integer,
    Float,
}

/// `None` for types the form does not know how to render
pub fn input_kind(field_type: &FieldType) -> Option<InputKind> {
    match field_type {
        FieldType::Single => Some(InputKind::Text),
        FieldType::Multi => Some(InputKind::TextArea),
        FieldType::Int => Some(InputKind::Integer),
        FieldType::Float => Some(InputKind::Float),
        FieldType::Unknown(_) => None,
    }
}

/// Labelled input for the field at `index`; edits are reported as `(index, value)`.
/// Unknown field types render nothing.
#[component]
pub fn CustomFieldInput(
    index: usize,
    name: String,
    field_type: FieldType,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_edit: Callback<(usize, String)>,
) -> impl IntoView {
    let kind = input_kind(&field_type);
    if kind.is_none() {
        log::debug!("[FIELDS] skipping {:?} with type {:?}", name, field_type.as_str());
    }

    kind.map(|kind| {
        let on_input = move |ev: web_sys::Event| on_edit.run((index, event_target_value(&ev)));
        let control = match kind {
            InputKind::Text => view! {
                <input type="text" name=name.clone() prop:value=move || value.get() on:input=on_input />
            }.into_any(),
            InputKind::TextArea => view! {
                <textarea
                    name=name.clone()
                    style="resize: vertical; height: 100px"
                    prop:value=move || value.get()
                    on:input=on_input
                ></textarea>
            }.into_any(),
            InputKind::Integer => view! {
                <input type="number" min="0" step="1" name=name.clone() prop:value=move || value.get() on:input=on_input />
            }.into_any(),
            InputKind::Float => view! {
                <input type="number" step="any" name=name.clone() prop:value=move || value.get() on:input=on_input />
            }.into_any(),
        };
        view! {
            <div class="form-group">
                <label class="form-label">{name.clone()}</label>
                <div class="form-control">{control}</div>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_dispatch() {
        assert_eq!(input_kind(&FieldType::Single), Some(InputKind::Text));
        assert_eq!(input_kind(&FieldType::Multi), Some(InputKind::TextArea));
        assert_eq!(input_kind(&FieldType::Int), Some(InputKind::Integer));
        assert_eq!(input_kind(&FieldType::Float), Some(InputKind::Float));
    }

    #[test]
    fn test_unknown_type_renders_nothing() {
        assert_eq!(input_kind(&FieldType::parse("Date")), None);
        assert_eq!(input_kind(&FieldType::parse("")), None);
    }
}
