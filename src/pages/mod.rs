//! Screens
//!
//! One component per top-level route.

mod home;
mod requests;
mod profile;
mod cart;
mod admin;

pub use home::HomePage;
pub use requests::RequestsPage;
pub use profile::ProfilePage;
pub use cart::CartPage;
pub use admin::AdminPage;

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <p class="not-found">"Page not found."</p> }
}
