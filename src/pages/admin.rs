//! Admin Screen
//!
//! Staff-only tabs for disbursements and item creation.

use leptos::prelude::*;

use crate::components::{DisbursementPanel, ItemCreationForm};
use crate::store::{store_is_staff, use_app_store};

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Disburse,
    CreateItem,
}

const ADMIN_TABS: &[(AdminTab, &str)] = &[
    (AdminTab::Disburse, "Disburse"),
    (AdminTab::CreateItem, "Create Item"),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    let store = use_app_store();
    let (tab, set_tab) = signal(AdminTab::Disburse);

    view! {
        <Show
            when=move || store_is_staff(&store)
            fallback=|| view! { <div class="alert alert-warning">"You do not have access to this page."</div> }
        >
            <div class="admin">
                <div class="tab-row">
                    {ADMIN_TABS.iter().map(|(value, label)| {
                        let value = *value;
                        view! {
                            <button
                                type="button"
                                class=move || if tab.get() == value { "tab-btn active" } else { "tab-btn" }
                                on:click=move |_| set_tab.set(value)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
                {move || match tab.get() {
                    AdminTab::Disburse => view! { <DisbursementPanel /> }.into_any(),
                    AdminTab::CreateItem => view! { <ItemCreationForm /> }.into_any(),
                }}
            </div>
        </Show>
    }
}
