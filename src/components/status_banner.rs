//! Status Banner Component
//!
//! Success well or error alert shown above a form.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::item_creation::Banner;

#[component]
pub fn StatusBanner(#[prop(into)] banner: Signal<Banner>) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.api().config().clone();

    move || match banner.get() {
        Banner::None => None,
        Banner::Created(name) => {
            let href = config.item_page(&name);
            Some(view! {
                <div class="row">
                    <div class="well well-lg">
                        "Item " <a href=href>{name}</a> " successfully created!"
                    </div>
                </div>
            }.into_any())
        }
        Banner::Error(message) => Some(view! {
            <div class="row">
                <div class="alert alert-danger">{message}</div>
            </div>
        }.into_any()),
    }
}
