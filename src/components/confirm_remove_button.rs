//! Confirm Remove Button Component
//!
//! Cart rows use this to drop an entry only after a second click.

use leptos::prelude::*;

/// Bootstrap classes shared by the small row buttons in the inventory and cart tables
pub const ROW_BUTTON_CLASS: &str = "btn btn-sm btn-default";

/// Question shown once the first click arms the button
pub fn confirm_prompt(item_name: &str) -> String {
    let name = item_name.trim();
    if name.is_empty() {
        "Remove from cart?".to_string()
    } else {
        format!("Remove {} from cart?", name)
    }
}

/// Two-step remove button for a cart row.
///
/// `item_name` feeds the prompt; `on_confirm` runs after "Yes".
#[component]
pub fn ConfirmRemoveButton(
    #[prop(into)] item_name: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] button_class: Option<String>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let class = button_class.unwrap_or_else(|| ROW_BUTTON_CLASS.to_string());
    let prompt = confirm_prompt(&item_name);
    let confirm_class = format!("{} btn-danger", class);
    let arm_class = class.clone();

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button type="button" class=arm_class.clone() on:click=move |_| set_armed.set(true)>
                    "Remove"
                </button>
            }
        >
            <span class="cart-remove-confirm">
                <span class="help-inline">{prompt.clone()}</span>
                " "
                <button
                    type="button"
                    class=confirm_class.clone()
                    on:click=move |_| {
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                " "
                <button type="button" class=class.clone() on:click=move |_| set_armed.set(false)>
                    "Keep"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompt_names_item() {
        assert_eq!(confirm_prompt(" Resistor "), "Remove Resistor from cart?");
        assert_eq!(confirm_prompt("  "), "Remove from cart?");
    }
}
