//! Profile Screen

use leptos::prelude::*;

use crate::components::ApiTokenPanel;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="profile">
            {move || store.current_user().get().map(|user| view! {
                <div class="profile-info">
                    <h3>{user.display_name()}</h3>
                    <p>"Username: " {user.username.clone()}</p>
                    <p>"Email: " {user.email.clone()}</p>
                    <p>{if user.is_staff { "Staff" } else { "User" }}</p>
                </div>
            })}
            <ApiTokenPanel />
        </div>
    }
}
