//! Item Creation Form Component
//!
//! Draft item inputs, dynamic custom fields and the submit button.
//! See [`crate::item_creation`] for the submit sequence.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{CustomFieldInput, StatusBanner, TagMultiSelect};
use crate::api::Api;
use crate::context::use_app_context;
use crate::item_creation::{finish_submit, refresh_descriptors, submit_draft, Banner, DraftItem};

/// Fetch descriptors into `draft`, leaving it untouched on failure
async fn load_fields(api: Api, draft: RwSignal<DraftItem>) {
    let mut scratch = DraftItem::default();
    if refresh_descriptors(&api, &mut scratch).await.is_ok() {
        log::debug!("[ITEM-FORM] {} custom fields", scratch.custom_fields.len());
        draft.update(|d| d.custom_fields = scratch.custom_fields);
    }
}

/// Reactive view of one string field of the draft
fn draft_text(draft: RwSignal<DraftItem>, get: fn(&DraftItem) -> &String) -> Signal<String> {
    Signal::derive(move || draft.with(|d| get(d).clone()))
}

/// Labelled text row bound to one draft string
#[component]
fn DraftRow(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    let control = if multiline {
        view! {
            <textarea
                name=name
                style="resize: vertical; height: 100px"
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            ></textarea>
        }.into_any()
    } else {
        view! {
            <input
                type=if numeric { "number" } else { "text" }
                min=numeric.then_some("0")
                step=numeric.then_some("1")
                name=name
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            />
        }.into_any()
    };
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <div class="form-control">{control}</div>
        </div>
    }
}

/// Form for creating inventory items
#[component]
pub fn ItemCreationForm() -> impl IntoView {
    let ctx = use_app_context();

    let draft = RwSignal::new(DraftItem::default());
    let banner = RwSignal::new(Banner::None);
    let (submitting, set_submitting) = signal(false);

    // Load descriptors on mount
    Effect::new(move |_| {
        spawn_local(load_fields(ctx.api(), draft));
    });

    let submit = move |_: web_sys::MouseEvent| {
        let api = ctx.api();
        let snapshot = draft.get_untracked();
        set_submitting.set(true);
        spawn_local(async move {
            let result = submit_draft(&api, &snapshot, |write| spawn_local(write)).await;

            let mut next_draft = draft.get_untracked();
            let mut next_banner = Banner::None;
            let refetch = finish_submit(&mut next_draft, &mut next_banner, result);
            draft.set(next_draft);
            banner.set(next_banner);
            set_submitting.set(false);

            if refetch {
                load_fields(api, draft).await;
            }
        });
    };

    view! {
        <div class="container-fluid item-creation">
            <div class="row">
                <h3>"Item Creation"</h3>
                <hr />
                <p>"Use this form to add new items to the inventory."</p>
            </div>

            <StatusBanner banner=banner />

            <div class="panel form-horizontal">
                <h4>"Create an item"</h4>
                <hr />

                <DraftRow
                    label="Name"
                    name="name"
                    value=draft_text(draft, |d| &d.name)
                    on_edit=move |v: String| draft.update(|d| d.name = v)
                />
                <DraftRow
                    label="Model No."
                    name="model_no"
                    value=draft_text(draft, |d| &d.model_no)
                    on_edit=move |v: String| draft.update(|d| d.model_no = v)
                />
                <DraftRow
                    label="Quantity"
                    name="quantity"
                    numeric=true
                    value=draft_text(draft, |d| &d.quantity)
                    on_edit=move |v: String| draft.update(|d| d.quantity = v)
                />
                <DraftRow
                    label="Description"
                    name="description"
                    multiline=true
                    value=draft_text(draft, |d| &d.description)
                    on_edit=move |v: String| draft.update(|d| d.description = v)
                />

                <div class="form-group">
                    <label class="form-label">"Tags"</label>
                    <div class="form-control">
                        <TagMultiSelect
                            selected=Signal::derive(move || draft.with(|d| d.tags.clone()))
                            on_change={move |tags: Vec<String>| draft.update(|d| d.tags = tags)}
                        />
                    </div>
                </div>

                <For
                    each=move || draft.with(|d| {
                        d.custom_fields
                            .iter()
                            .enumerate()
                            .map(|(i, f)| (i, f.name.clone(), f.field_type.clone()))
                            .collect::<Vec<_>>()
                    })
                    key=|(i, name, field_type)| (*i, name.clone(), field_type.as_str().to_string())
                    children=move |(index, name, field_type)| {
                        let value = Signal::derive(move || draft.with(|d| {
                            d.custom_fields.get(index).map(|f| f.value.clone()).unwrap_or_default()
                        }));
                        view! {
                            <CustomFieldInput
                                index=index
                                name=name
                                field_type=field_type
                                value=value
                                on_edit=move |(i, v): (usize, String)| draft.update(|d| d.set_field_value(i, v))
                            />
                        }
                    }
                />

                <div class="form-group">
                    <button
                        type="button"
                        class="btn btn-sm btn-info"
                        disabled=move || submitting.get()
                        on:click=submit
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
