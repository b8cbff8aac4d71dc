//! Requests Screen
//!
//! The user's item requests, filtered by status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::SelectFilter;
use crate::context::use_app_context;
use crate::models::ItemRequest;

/// `(value, label)` pairs for the status filter; "" means all
pub fn status_options() -> Vec<(String, String)> {
    [("", "All"), ("Outstanding", "Outstanding"), ("Approved", "Approved"), ("Denied", "Denied")]
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect()
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (status, set_status) = signal(String::new());
    let (requests, set_requests) = signal(Vec::<ItemRequest>::new());
    let (failed, set_failed) = signal(false);

    Effect::new(move |_| {
        let current = status.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_requests(&current).await {
                Ok(loaded) => {
                    set_requests.set(loaded);
                    set_failed.set(false);
                }
                Err(err) => {
                    log::error!("[REQUESTS] {}", err);
                    set_failed.set(true);
                }
            }
        });
    });

    view! {
        <div class="requests">
            <h3>"Requests"</h3>
            <hr />
            <SelectFilter options=status_options() value=status on_change=move |v: String| set_status.set(v) />
            <Show when=move || failed.get()>
                <div class="alert alert-danger">"Could not load requests."</div>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Quantity"</th>
                        <th>"Opened"</th>
                        <th>"Reason"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || requests.get()
                        key=|req| req.id
                        children=|req| view! {
                            <tr>
                                <td>{req.item.name.clone()}</td>
                                <td>{req.quantity}</td>
                                <td>{req.date_open.clone()}</td>
                                <td>{req.open_reason.clone()}</td>
                                <td>{req.status.clone()}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_start_with_all() {
        let options = status_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], (String::new(), "All".to_string()));
    }
}
