//! Item Creation Workflow
//!
//! Draft state for the item creation form and the submit sequence:
//! validate, create the item, then fire one write per filled-in custom field.
//! Field writes are spawned and never awaited; a failed write is only logged.

use futures::future::{FutureExt, LocalBoxFuture};
use thiserror::Error;

use crate::api::{Api, ApiError};
use crate::models::{CustomFieldDescriptor, CustomFieldEntry, NewItem};

pub const VALIDATION_MESSAGE: &str = "Ensure that name is not blank and quantity is a positive integer.";
pub const REQUEST_FAILED_MESSAGE: &str = "An error occurred.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Ensure that name is not blank and quantity is a positive integer.")]
    Invalid,
    #[error("An error occurred.")]
    Request(#[source] ApiError),
}

/// Backend calls the workflow needs
pub trait InventoryApi: Clone + 'static {
    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError>;
    async fn set_custom_field(&self, item_name: &str, field_name: &str, value: &str) -> Result<(), ApiError>;
    async fn list_custom_fields(&self) -> Result<Vec<CustomFieldDescriptor>, ApiError>;
}

impl InventoryApi for Api {
    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError> {
        Api::create_item(self, item).await
    }

    async fn set_custom_field(&self, item_name: &str, field_name: &str, value: &str) -> Result<(), ApiError> {
        Api::set_custom_field(self, item_name, field_name, value).await
    }

    async fn list_custom_fields(&self) -> Result<Vec<CustomFieldDescriptor>, ApiError> {
        Api::list_custom_fields(self).await
    }
}

/// One pending `PUT /api/items/{item}/fields/{field}/`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWrite {
    pub item_name: String,
    pub field_name: String,
    pub value: String,
}

/// In-progress item owned by the creation form
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub name: String,
    /// Raw text of the quantity input
    pub quantity: String,
    pub model_no: String,
    pub description: String,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomFieldEntry>,
}

impl Default for DraftItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: "0".to_string(),
            model_no: String::new(),
            description: String::new(),
            tags: Vec::new(),
            custom_fields: Vec::new(),
        }
    }
}

impl DraftItem {
    /// Name must be non-blank and quantity a non-negative integer.
    /// An empty quantity input counts as 0. The name is sent as typed.
    pub fn validate(&self) -> Result<NewItem, SubmitError> {
        if self.name.trim().is_empty() {
            return Err(SubmitError::Invalid);
        }
        let quantity = match self.quantity.trim() {
            "" => 0,
            raw => raw.parse::<i64>().map_err(|_| SubmitError::Invalid)?,
        };
        if quantity < 0 {
            return Err(SubmitError::Invalid);
        }
        Ok(NewItem {
            name: self.name.clone(),
            quantity,
            model_no: self.model_no.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
        })
    }

    /// Update the value at `index`; out-of-range indices are ignored
    pub fn set_field_value(&mut self, index: usize, value: String) {
        if let Some(entry) = self.custom_fields.get_mut(index) {
            entry.value = value;
        }
    }

    /// Replace the field list with a fresh fetch, all values empty
    pub fn apply_descriptors(&mut self, descriptors: Vec<CustomFieldDescriptor>) {
        self.custom_fields = descriptors.into_iter().map(CustomFieldEntry::from).collect();
    }

    /// Writes to issue for `item_name`: one per field holding a value
    pub fn field_writes(&self, item_name: &str) -> Vec<FieldWrite> {
        self.custom_fields
            .iter()
            .filter(|entry| !entry.value.is_empty())
            .map(|entry| FieldWrite {
                item_name: item_name.to_string(),
                field_name: entry.name.clone(),
                value: entry.value.clone(),
            })
            .collect()
    }

    /// Back to defaults, keeping the current descriptors with empty values
    pub fn reset(&mut self) {
        let fields = std::mem::take(&mut self.custom_fields);
        *self = Self::default();
        self.custom_fields = fields
            .into_iter()
            .map(|entry| CustomFieldEntry { value: String::new(), ..entry })
            .collect();
    }
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    pub name: String,
    pub field_writes: usize,
}

/// Validate, create the item, then hand one future per field write to `spawn`.
///
/// Returns once the item exists and the writes are spawned; their outcome
/// never reaches the caller.
pub async fn submit_draft<A, S>(api: &A, draft: &DraftItem, spawn: S) -> Result<Created, SubmitError>
where
    A: InventoryApi,
    S: Fn(LocalBoxFuture<'static, ()>),
{
    let new_item = draft.validate()?;

    if let Err(err) = api.create_item(&new_item).await {
        log::error!("[ITEM-FORM] create {:?} failed: {}", new_item.name, err);
        return Err(SubmitError::Request(err));
    }
    log::info!("[ITEM-FORM] created {:?}", new_item.name);

    let writes = draft.field_writes(&new_item.name);
    for write in writes.iter().cloned() {
        let api = api.clone();
        spawn(
            async move {
                if let Err(err) = api
                    .set_custom_field(&write.item_name, &write.field_name, &write.value)
                    .await
                {
                    log::warn!(
                        "[ITEM-FORM] field {:?} on {:?} not saved: {}",
                        write.field_name, write.item_name, err
                    );
                }
            }
            .boxed_local(),
        );
    }

    Ok(Created { name: new_item.name, field_writes: writes.len() })
}

/// Fetch descriptors and apply them; on failure the draft is left as is
pub async fn refresh_descriptors<A: InventoryApi>(api: &A, draft: &mut DraftItem) -> Result<(), ApiError> {
    let descriptors = api.list_custom_fields().await.map_err(|err| {
        log::warn!("[ITEM-FORM] custom fields not loaded: {}", err);
        err
    })?;
    draft.apply_descriptors(descriptors);
    Ok(())
}

/// Banner shown above the form
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Banner {
    #[default]
    None,
    Created(String),
    Error(String),
}

/// Fold a submit result into the form: reset on success, keep the draft on error.
/// Returns whether descriptors should be fetched again.
pub fn finish_submit(draft: &mut DraftItem, banner: &mut Banner, result: Result<Created, SubmitError>) -> bool {
    match result {
        Ok(created) => {
            draft.reset();
            *banner = Banner::Created(created.name);
            true
        }
        Err(err) => {
            *banner = Banner::Error(err.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;
    use futures::executor::block_on;
    use futures::future::join_all;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MockApi {
        calls: Rc<RefCell<Vec<String>>>,
        fail_create: bool,
        fail_fields: bool,
        descriptors: Vec<CustomFieldDescriptor>,
    }

    impl InventoryApi for MockApi {
        async fn create_item(&self, item: &NewItem) -> Result<(), ApiError> {
            let tags = if item.tags.is_empty() { String::new() } else { format!(" [{}]", item.tags.join(",")) };
            self.calls.borrow_mut().push(format!("POST {}{}", item.name, tags));
            if self.fail_create {
                return Err(ApiError::Status { method: "POST", url: "/api/items/".to_string(), status: 400 });
            }
            Ok(())
        }

        async fn set_custom_field(&self, item_name: &str, field_name: &str, value: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("PUT {}/{}={}", item_name, field_name, value));
            if self.fail_fields {
                return Err(ApiError::Network("offline".to_string()));
            }
            Ok(())
        }

        async fn list_custom_fields(&self) -> Result<Vec<CustomFieldDescriptor>, ApiError> {
            self.calls.borrow_mut().push("GET fields".to_string());
            Ok(self.descriptors.clone())
        }
    }

    fn descriptor(name: &str, field_type: FieldType) -> CustomFieldDescriptor {
        CustomFieldDescriptor { name: name.to_string(), field_type, private: false }
    }

    fn draft_with_fields(values: &[(&str, &str)]) -> DraftItem {
        let mut draft = DraftItem { name: "Multimeter".to_string(), quantity: "4".to_string(), ..Default::default() };
        draft.apply_descriptors(values.iter().map(|(n, _)| descriptor(n, FieldType::Single)).collect());
        for (i, (_, v)) in values.iter().enumerate() {
            draft.set_field_value(i, v.to_string());
        }
        draft
    }

    /// Runs `submit_draft`, then drives every spawned write to completion
    fn run_submit(api: &MockApi, draft: &DraftItem) -> (Result<Created, SubmitError>, usize) {
        let spawned: RefCell<Vec<LocalBoxFuture<'static, ()>>> = RefCell::new(Vec::new());
        let result = block_on(submit_draft(api, draft, |fut| spawned.borrow_mut().push(fut)));
        let futures = spawned.into_inner();
        let count = futures.len();
        block_on(join_all(futures));
        (result, count)
    }

    #[test]
    fn test_empty_name_makes_no_request() {
        let api = MockApi::default();
        let draft = DraftItem::default();
        let (result, spawned) = run_submit(&api, &draft);
        assert_eq!(result, Err(SubmitError::Invalid));
        assert_eq!(spawned, 0);
        assert!(api.calls.borrow().is_empty());

        let mut banner = Banner::None;
        let mut kept = draft.clone();
        assert!(!finish_submit(&mut kept, &mut banner, result));
        assert_eq!(banner, Banner::Error(VALIDATION_MESSAGE.to_string()));
    }

    #[test]
    fn test_negative_quantity_same_as_empty_name() {
        let api = MockApi::default();
        let draft = DraftItem { name: "Scope".to_string(), quantity: "-1".to_string(), ..Default::default() };
        let (result, _) = run_submit(&api, &draft);
        assert_eq!(result, Err(SubmitError::Invalid));
        assert!(api.calls.borrow().is_empty());
        assert_eq!(result.unwrap_err().to_string(), VALIDATION_MESSAGE);
    }

    #[test]
    fn test_validate_quantity_rules() {
        let mut draft = DraftItem { name: "Scope".to_string(), ..Default::default() };
        draft.quantity = String::new();
        assert_eq!(draft.validate().unwrap().quantity, 0);
        draft.quantity = " 12 ".to_string();
        assert_eq!(draft.validate().unwrap().quantity, 12);
        draft.quantity = "2.5".to_string();
        assert_eq!(draft.validate(), Err(SubmitError::Invalid));
        draft.quantity = "lots".to_string();
        assert_eq!(draft.validate(), Err(SubmitError::Invalid));
        draft.name = "   ".to_string();
        draft.quantity = "1".to_string();
        assert_eq!(draft.validate(), Err(SubmitError::Invalid));
    }

    #[test]
    fn test_success_without_fields_resets_draft() {
        let api = MockApi::default();
        let mut draft = DraftItem {
            name: "Soldering Iron".to_string(),
            quantity: "3".to_string(),
            model_no: "FX-888D".to_string(),
            description: "Bench iron".to_string(),
            tags: vec!["tools".to_string()],
            custom_fields: Vec::new(),
        };
        let (result, spawned) = run_submit(&api, &draft);
        assert_eq!(spawned, 0);
        assert_eq!(*api.calls.borrow(), vec!["POST Soldering Iron [tools]".to_string()]);

        let mut banner = Banner::None;
        assert!(finish_submit(&mut draft, &mut banner, result));
        assert_eq!(draft, DraftItem::default());
        assert_eq!(banner, Banner::Created("Soldering Iron".to_string()));
    }

    #[test]
    fn test_one_write_per_filled_field() {
        let api = MockApi::default();
        let draft = draft_with_fields(&[("serial", "SN-1"), ("notes", ""), ("voltage", "5")]);
        let (result, spawned) = run_submit(&api, &draft);
        assert_eq!(result, Ok(Created { name: "Multimeter".to_string(), field_writes: 2 }));
        assert_eq!(spawned, 2);
        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert!(calls.contains(&"PUT Multimeter/serial=SN-1".to_string()));
        assert!(calls.contains(&"PUT Multimeter/voltage=5".to_string()));
    }

    #[test]
    fn test_failed_field_writes_still_succeed() {
        let api = MockApi { fail_fields: true, ..Default::default() };
        let draft = draft_with_fields(&[("serial", "SN-1")]);
        let (result, spawned) = run_submit(&api, &draft);
        assert!(result.is_ok());
        assert_eq!(spawned, 1);
    }

    #[test]
    fn test_create_failure_keeps_draft() {
        let api = MockApi { fail_create: true, ..Default::default() };
        let mut draft = draft_with_fields(&[("serial", "SN-1")]);
        let before = draft.clone();
        let (result, spawned) = run_submit(&api, &draft);
        assert_eq!(spawned, 0);
        assert!(matches!(result, Err(SubmitError::Request(_))));

        let mut banner = Banner::None;
        assert!(!finish_submit(&mut draft, &mut banner, result));
        assert_eq!(draft, before);
        assert_eq!(banner, Banner::Error(REQUEST_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn test_refetch_after_success_clears_values() {
        let api = MockApi {
            descriptors: vec![descriptor("serial", FieldType::Single), descriptor("weight", FieldType::Float)],
            ..Default::default()
        };
        let mut draft = draft_with_fields(&[("serial", "SN-1")]);
        let (result, _) = run_submit(&api, &draft);
        let mut banner = Banner::None;
        if finish_submit(&mut draft, &mut banner, result) {
            block_on(refresh_descriptors(&api, &mut draft)).unwrap();
        }
        assert_eq!(draft.custom_fields.len(), 2);
        assert!(draft.custom_fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(draft.custom_fields[1].field_type, FieldType::Float);
        assert_eq!(api.calls.borrow().last().unwrap(), "GET fields");
    }

    #[test]
    fn test_tagged_item_still_gets_field_writes() {
        let api = MockApi::default();
        let mut draft = draft_with_fields(&[("serial", "SN-9"), ("voltage", "12")]);
        draft.tags = vec!["lab".to_string(), "bench".to_string()];
        let (result, spawned) = run_submit(&api, &draft);
        assert_eq!(result, Ok(Created { name: "Multimeter".to_string(), field_writes: 2 }));
        assert_eq!(spawned, 2);
        let calls = api.calls.borrow();
        assert_eq!(calls[0], "POST Multimeter [lab,bench]");
        assert!(calls.contains(&"PUT Multimeter/serial=SN-9".to_string()));
        assert!(calls.contains(&"PUT Multimeter/voltage=12".to_string()));

        let mut banner = Banner::None;
        assert!(finish_submit(&mut draft, &mut banner, result));
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_name_sent_as_typed() {
        let draft = DraftItem { name: " Scope 2 ".to_string(), ..Default::default() };
        assert_eq!(draft.validate().unwrap().name, " Scope 2 ");

        let api = MockApi::default();
        let draft = draft_with_fields(&[("serial", "A")]);
        let draft = DraftItem { name: " Scope".to_string(), ..draft };
        let (result, _) = run_submit(&api, &draft);
        assert_eq!(result.unwrap().name, " Scope");
        assert!(api.calls.borrow().contains(&"PUT  Scope/serial=A".to_string()));
    }

    #[test]
    fn test_set_field_value_out_of_range_ignored() {
        let mut draft = draft_with_fields(&[("serial", "")]);
        draft.set_field_value(5, "x".to_string());
        assert_eq!(draft.custom_fields.len(), 1);
        assert_eq!(draft.custom_fields[0].value, "");
    }
}
