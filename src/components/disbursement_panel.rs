//! Disbursement Panel Component
//!
//! Staff form to hand items directly to a user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SelectFilter;
use crate::context::use_app_context;
use crate::models::{Disbursement, User};

pub const DISBURSE_INVALID: &str = "Choose a user, an item and a quantity of at least 1.";

/// Build the request body, or the message to show
pub fn build_disbursement(receiver: &str, item: &str, quantity: &str, reason: &str) -> Result<Disbursement, &'static str> {
    let item = item.trim();
    if receiver.is_empty() || item.is_empty() {
        return Err(DISBURSE_INVALID);
    }
    let quantity = quantity.trim().parse::<i64>().map_err(|_| DISBURSE_INVALID)?;
    if quantity < 1 {
        return Err(DISBURSE_INVALID);
    }
    Ok(Disbursement {
        receiver: receiver.to_string(),
        item: item.to_string(),
        quantity,
        reason: reason.trim().to_string(),
    })
}

fn user_options(users: &[User]) -> Vec<(String, String)> {
    users
        .iter()
        .map(|u| (u.username.clone(), format!("{} ({})", u.display_name(), u.username)))
        .collect()
}

#[component]
pub fn DisbursementPanel() -> impl IntoView {
    let ctx = use_app_context();

    let (users, set_users) = signal(Vec::<User>::new());
    let (receiver, set_receiver) = signal(String::new());
    let (item, set_item) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let (reason, set_reason) = signal(String::new());
    let (message, set_message) = signal::<Option<Result<String, String>>>(None);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_users().await {
                Ok(loaded) => set_users.set(loaded),
                Err(err) => log::error!("[DISBURSE] users not loaded: {}", err),
            }
        });
    });

    let submit = move |_: web_sys::MouseEvent| {
        let body = match build_disbursement(&receiver.get(), &item.get(), &quantity.get(), &reason.get()) {
            Ok(body) => body,
            Err(msg) => {
                set_message.set(Some(Err(msg.to_string())));
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.disburse(&body).await {
                Ok(()) => {
                    set_message.set(Some(Ok(format!(
                        "Disbursed {} × {} to {}.",
                        body.quantity, body.item, body.receiver
                    ))));
                    set_item.set(String::new());
                    set_quantity.set(String::from("1"));
                    set_reason.set(String::new());
                }
                Err(err) => {
                    log::error!("[DISBURSE] {}", err);
                    set_message.set(Some(Err("An error occurred.".to_string())));
                }
            }
        });
    };

    view! {
        <div class="disbursement-panel">
            <h3>"Disburse Items"</h3>
            <hr />
            {move || message.get().map(|m| match m {
                Ok(text) => view! { <div class="alert alert-success">{text}</div> }.into_any(),
                Err(text) => view! { <div class="alert alert-danger">{text}</div> }.into_any(),
            })}
            <div class="form-group">
                <label class="form-label">"User"</label>
                {move || view! {
                    <SelectFilter
                        options=user_options(&users.get())
                        value=receiver
                        on_change=move |v: String| set_receiver.set(v)
                        placeholder="Select a user"
                    />
                }}
            </div>
            <div class="form-group">
                <label class="form-label">"Item"</label>
                <input type="text" prop:value=move || item.get() on:input=move |ev| set_item.set(event_target_value(&ev)) />
            </div>
            <div class="form-group">
                <label class="form-label">"Quantity"</label>
                <input type="number" min="1" step="1" prop:value=move || quantity.get() on:input=move |ev| set_quantity.set(event_target_value(&ev)) />
            </div>
            <div class="form-group">
                <label class="form-label">"Reason"</label>
                <textarea prop:value=move || reason.get() on:input=move |ev| set_reason.set(event_target_value(&ev))></textarea>
            </div>
            <button type="button" class="btn btn-sm btn-info" on:click=submit>"Disburse"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_disbursement_ok() {
        let body = build_disbursement("alice", " Scope ", "2", " lab 3 ").unwrap();
        assert_eq!(body.item, "Scope");
        assert_eq!(body.quantity, 2);
        assert_eq!(body.reason, "lab 3");
    }

    #[test]
    fn test_build_disbursement_rejects() {
        assert_eq!(build_disbursement("", "Scope", "1", ""), Err(DISBURSE_INVALID));
        assert_eq!(build_disbursement("alice", "", "1", ""), Err(DISBURSE_INVALID));
        assert_eq!(build_disbursement("alice", "Scope", "0", ""), Err(DISBURSE_INVALID));
        assert_eq!(build_disbursement("alice", "Scope", "x", ""), Err(DISBURSE_INVALID));
    }
}
