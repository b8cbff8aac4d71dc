//! Item Endpoints
//!
//! Inventory listing, item creation and custom field values.

use serde::Serialize;

use super::{with_query, Api, ApiError, FIELDS, ITEMS, item_field_path};
use crate::models::{CustomFieldDescriptor, Item, NewItem};

/// Inventory grid filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub search: String,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
}

impl ItemFilter {
    pub fn path(&self) -> String {
        with_query(
            ITEMS,
            &[
                ("search", self.search.trim().to_string()),
                ("tags", self.include_tags.join(",")),
                ("excludeTags", self.exclude_tags.join(",")),
            ],
        )
    }
}

#[derive(Serialize)]
struct FieldValueBody<'a> {
    value: &'a str,
}

impl Api {
    pub async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>, ApiError> {
        self.get_list(&filter.path()).await
    }

    /// The reply body is not decoded; it echoes tags as primary keys
    pub async fn create_item(&self, item: &NewItem) -> Result<(), ApiError> {
        self.send_json_unit("POST", ITEMS, item).await
    }

    pub async fn list_custom_fields(&self) -> Result<Vec<CustomFieldDescriptor>, ApiError> {
        self.get_list(FIELDS).await
    }

    pub async fn set_custom_field(&self, item_name: &str, field_name: &str, value: &str) -> Result<(), ApiError> {
        let path = item_field_path(item_name, field_name);
        self.send_json_unit("PUT", &path, &FieldValueBody { value }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_path_empty() {
        assert_eq!(ItemFilter::default().path(), "/api/items/");
    }

    #[test]
    fn test_filter_path_all() {
        let filter = ItemFilter {
            search: " scope ".to_string(),
            include_tags: vec!["lab".to_string(), "bench".to_string()],
            exclude_tags: vec!["broken".to_string()],
        };
        assert_eq!(filter.path(), "/api/items/?search=scope&tags=lab%2Cbench&excludeTags=broken");
    }
}
