//! Cart Screen
//!
//! Items staged for request: edit quantities, remove, then submit as requests.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ConfirmRemoveButton;
use crate::context::use_app_context;
use crate::models::CartItem;

/// Quantities in the cart are whole numbers of at least 1
pub fn parse_cart_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|q| *q >= 1)
}

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app_context();
    let (entries, set_entries) = signal(Vec::<CartItem>::new());
    let (reason, set_reason) = signal(String::new());
    let (message, set_message) = signal::<Option<Result<String, String>>>(None);

    Effect::new(move |_| {
        let _ = ctx.cart_version.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_cart().await {
                Ok(loaded) => set_entries.set(loaded),
                Err(err) => {
                    log::error!("[CART] {}", err);
                    set_message.set(Some(Err("Could not load cart.".to_string())));
                }
            }
        });
    });

    let update_quantity = move |id: u32, raw: String| {
        let Some(quantity) = parse_cart_quantity(&raw) else {
            set_message.set(Some(Err("Quantity must be at least 1.".to_string())));
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            if let Err(err) = api.update_cart_quantity(id, quantity).await {
                log::error!("[CART] update {}: {}", id, err);
                set_message.set(Some(Err("An error occurred.".to_string())));
            }
            ctx.cart_changed();
        });
    };

    let remove = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            if let Err(err) = api.remove_from_cart(id).await {
                log::error!("[CART] remove {}: {}", id, err);
                set_message.set(Some(Err("An error occurred.".to_string())));
            }
            ctx.cart_changed();
        });
    };

    let submit = move |_: web_sys::MouseEvent| {
        let api = ctx.api();
        let open_reason = reason.get();
        spawn_local(async move {
            match api.submit_cart(&open_reason).await {
                Ok(()) => {
                    set_reason.set(String::new());
                    set_message.set(Some(Ok("Requests submitted.".to_string())));
                    ctx.cart_changed();
                }
                Err(err) => {
                    log::error!("[CART] submit: {}", err);
                    set_message.set(Some(Err("An error occurred.".to_string())));
                }
            }
        });
    };

    view! {
        <div class="cart">
            <h3>"Cart"</h3>
            <hr />
            {move || message.get().map(|m| match m {
                Ok(text) => view! { <div class="alert alert-success">{text}</div> }.into_any(),
                Err(text) => view! { <div class="alert alert-danger">{text}</div> }.into_any(),
            })}
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Quantity"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || entries.get()
                            key=|entry| (entry.id, entry.quantity)
                            children=move |entry| {
                                let id = entry.id;
                                view! {
                                    <tr>
                                        <td>{entry.item.name.clone()}</td>
                                        <td>
                                            <input
                                                type="number"
                                                min="1"
                                                step="1"
                                                prop:value=entry.quantity.to_string()
                                                on:change=move |ev| update_quantity(id, event_target_value(&ev))
                                            />
                                        </td>
                                        <td>
                                            <ConfirmRemoveButton item_name=entry.item.name.clone() on_confirm={move |_: ()| remove(id)} />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="form-group">
                    <label class="form-label">"Reason"</label>
                    <textarea prop:value=move || reason.get() on:input=move |ev| set_reason.set(event_target_value(&ev))></textarea>
                </div>
                <button type="button" class="btn btn-sm btn-info" on:click=submit>"Request items"</button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cart_quantity() {
        assert_eq!(parse_cart_quantity("3"), Some(3));
        assert_eq!(parse_cart_quantity(" 1 "), Some(1));
        assert_eq!(parse_cart_quantity("0"), None);
        assert_eq!(parse_cart_quantity("-2"), None);
        assert_eq!(parse_cart_quantity("two"), None);
    }
}
