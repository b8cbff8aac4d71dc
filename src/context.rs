//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::Api;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever the cart changes - read
    pub cart_version: ReadSignal<u32>,
    /// Bumped whenever the cart changes - write
    set_cart_version: WriteSignal<u32>,
    api: StoredValue<Api>,
}

impl AppContext {
    pub fn new(cart_version: (ReadSignal<u32>, WriteSignal<u32>), api: Api) -> Self {
        Self {
            cart_version: cart_version.0,
            set_cart_version: cart_version.1,
            api: StoredValue::new(api),
        }
    }

    /// HTTP client for this app
    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// Route prefix the screens live under
    pub fn app_prefix(&self) -> String {
        self.api.with_value(|api| api.config().app_prefix.clone())
    }

    /// Tell cart listeners to reload
    pub fn cart_changed(&self) {
        self.set_cart_version.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
