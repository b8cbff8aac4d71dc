//! Kipventory Frontend App
//!
//! Loads the current user, then hands the page to the router.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::Api;
use crate::components::KipNav;
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::pages::{AdminPage, CartPage, HomePage, NotFound, ProfilePage, RequestsPage};
use crate::store::{store_set_tags, store_set_user, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    log::debug!("[APP] config {:?}", config);

    let store = Store::new(AppState::default());
    let (cart_version, set_cart_version) = signal(0u32);
    let ctx = AppContext::new((cart_version, set_cart_version), Api::new(config));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Current user gates every route; tags feed every selector
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.current_user().await {
                Ok(user) => {
                    log::info!("[APP] signed in as {} (staff={})", user.username, user.is_staff);
                    store_set_user(&store, Some(user));
                }
                Err(err) => {
                    log::error!("[APP] current user: {}", err);
                    store_set_user(&store, None);
                }
            }
            match api.list_tags().await {
                Ok(tags) => store_set_tags(&store, tags),
                Err(err) => log::warn!("[APP] tags: {}", err),
            }
        });
    });

    view! {
        <Show
            when=move || store.user_loaded().get()
            fallback=|| view! { <p class="loading">"Loading..."</p> }
        >
            <Show
                when=move || store.current_user().get().is_some()
                fallback=|| view! { <div class="alert alert-danger">"Could not load your account. Please sign in again."</div> }
            >
                <Router>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/app" /> } />
                        <ParentRoute path=path!("/app") view=KipNav>
                            <Route path=path!("") view=HomePage />
                            <Route path=path!("requests") view=RequestsPage />
                            <Route path=path!("profile") view=ProfilePage />
                            <Route path=path!("cart") view=CartPage />
                            <Route path=path!("admin") view=AdminPage />
                        </ParentRoute>
                    </Routes>
                </Router>
            </Show>
        </Show>
    }
}
