//! Inventory Screen
//!
//! Filterable item grid with add-to-cart.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ItemFilter;
use crate::components::{InventoryGridHeader, ROW_BUTTON_CLASS};
use crate::context::use_app_context;
use crate::models::{Item, NewCartItem};

/// How long the add-to-cart notice stays up
const NOTICE_MS: u32 = 3000;

/// Transient message above the grid. Each `show` starts a new generation so
/// a stale timer cannot hide a newer message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notice {
    pub text: Option<String>,
    generation: u32,
}

impl Notice {
    /// Display `text`, returning the generation its timer must present
    pub fn show(&mut self, text: String) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.text = Some(text);
        self.generation
    }

    /// Hide the message if it is still the one shown at `generation`
    pub fn expire(&mut self, generation: u32) {
        if self.generation == generation {
            self.text = None;
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    let filter = RwSignal::new(ItemFilter::default());
    let (items, set_items) = signal(Vec::<Item>::new());
    let (failed, set_failed) = signal(false);
    let notice = RwSignal::new(Notice::default());

    // Reload whenever any filter changes
    Effect::new(move |_| {
        let current = filter.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_items(&current).await {
                Ok(loaded) => {
                    log::debug!("[INVENTORY] loaded {} items", loaded.len());
                    set_items.set(loaded);
                    set_failed.set(false);
                }
                Err(err) => {
                    log::error!("[INVENTORY] {}", err);
                    set_failed.set(true);
                }
            }
        });
    });

    let add_to_cart = move |item: Item| {
        let api = ctx.api();
        spawn_local(async move {
            let text = match api.add_to_cart(&NewCartItem { item: item.id, quantity: 1 }).await {
                Ok(()) => {
                    ctx.cart_changed();
                    format!("Added {} to cart.", item.name)
                }
                Err(err) => {
                    log::error!("[INVENTORY] add {:?} to cart: {}", item.name, err);
                    "An error occurred.".to_string()
                }
            };
            let mut generation = 0;
            notice.update(|n| generation = n.show(text));
            TimeoutFuture::new(NOTICE_MS).await;
            notice.update(|n| n.expire(generation));
        });
    };

    view! {
        <div class="inventory">
            <InventoryGridHeader
                include_tags=Signal::derive(move || filter.with(|f| f.include_tags.clone()))
                on_include_tags={move |tags: Vec<String>| filter.update(|f| f.include_tags = tags)}
                exclude_tags=Signal::derive(move || filter.with(|f| f.exclude_tags.clone()))
                on_exclude_tags={move |tags: Vec<String>| filter.update(|f| f.exclude_tags = tags)}
                on_search=move |text: String| filter.update(|f| f.search = text)
            />

            <Show when=move || failed.get()>
                <div class="alert alert-danger">"Could not load inventory."</div>
            </Show>
            {move || notice.with(|n| n.text.clone()).map(|text| view! { <div class="alert alert-info">{text}</div> })}

            <table class="table inventory-grid">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Model No."</th>
                        <th>"Quantity"</th>
                        <th>"Tags"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| {
                            let href = ctx.api().config().item_page(&item.name);
                            let for_cart = item.clone();
                            let out_of_stock = item.quantity < 1;
                            view! {
                                <tr>
                                    <td><a href=href>{item.name.clone()}</a></td>
                                    <td>{item.model_no.clone()}</td>
                                    <td>{item.quantity}</td>
                                    <td>{item.tag_labels().join(", ")}</td>
                                    <td>
                                        <button
                                            type="button"
                                            class=ROW_BUTTON_CLASS
                                            disabled=out_of_stock
                                            on:click=move |_| add_to_cart(for_cart.clone())
                                        >
                                            "Add to cart"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let mut notice = Notice::default();
        let first = notice.show("Added Resistor to cart.".to_string());
        let second = notice.show("Added Scope to cart.".to_string());
        notice.expire(first);
        assert_eq!(notice.text.as_deref(), Some("Added Scope to cart."));
        notice.expire(second);
        assert_eq!(notice.text, None);
    }
}
