//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Tag, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, once `/api/users/current/.json` answered
    pub current_user: Option<User>,
    /// True after the current-user fetch finished, successfully or not
    pub user_loaded: bool,
    /// All tags, shared by every tag selector
    pub tags: Vec<Tag>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the result of the current-user fetch
pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
    *store.user_loaded().write() = true;
}

/// Whether the signed-in user is staff (false while loading)
pub fn store_is_staff(store: &AppStore) -> bool {
    store.current_user().get().map(|u| u.is_staff).unwrap_or(false)
}

/// Replace the shared tag list
pub fn store_set_tags(store: &AppStore, tags: Vec<Tag>) {
    *store.tags().write() = tags;
}
