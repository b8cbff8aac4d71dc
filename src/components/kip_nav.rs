//! Navigation Bar Component
//!
//! Top bar linking the screens the current user may open, with the active
//! screen rendered below it.

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_location;

use crate::context::use_app_context;
use crate::routes::{screen_for_path, visible_screens};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn KipNav() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let prefix = ctx.app_prefix();
    let location = use_location();

    let links = move || {
        let prefix = prefix.clone();
        let path = location.pathname.get();
        store.current_user().get().map(|user| {
            let active = screen_for_path(&prefix, &path, &user);
            visible_screens(&user)
                .into_iter()
                .map(|screen| {
                    let href = screen.href(&prefix);
                    let class = if active == Some(screen) { "nav-item active" } else { "nav-item" };
                    view! {
                        <li class=class>
                            <A href=href>{screen.label()}</A>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let user_name = move || {
        store.current_user().get().map(|u| u.display_name()).unwrap_or_default()
    };

    view! {
        <div class="kip-app">
            <nav class="navbar">
                <span class="navbar-brand">"Kipventory"</span>
                <ul class="nav navbar-nav">{links}</ul>
                <span class="navbar-text navbar-right">{user_name}</span>
            </nav>
            <main class="kip-content">
                <Outlet />
            </main>
        </div>
    }
}
