//! API Token Panel Component
//!
//! Fetches a token for scripted API access on demand.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn ApiTokenPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (token, set_token) = signal(String::new());
    let (failed, set_failed) = signal(false);

    let generate = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let api = ctx.api();
        spawn_local(async move {
            match api.fetch_api_token().await {
                Ok(value) => {
                    set_token.set(value);
                    set_failed.set(false);
                }
                Err(err) => {
                    log::error!("[TOKEN] {}", err);
                    set_failed.set(true);
                }
            }
        });
    };

    view! {
        <div class="api-token-panel">
            <h3>"API Token Generator"</h3>
            <hr />
            <div class="row">
                <div class="col-xs-3">
                    <button type="button" class="btn btn-default" on:click=generate>"Generate Token"</button>
                </div>
                <div class="col-xs-3">
                    <p>"API Token:"</p>
                </div>
                <div class="col-xs-6">
                    <p class="api-token">{move || token.get()}</p>
                </div>
            </div>
            <Show when=move || failed.get()>
                <div class="alert alert-danger">"An error occurred."</div>
            </Show>
        </div>
    }
}
