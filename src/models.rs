//! Frontend Models
//!
//! Data structures matching backend serializers.

use serde::{Deserialize, Serialize};

/// Current user (matches `/api/users/current/.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
}

impl User {
    /// "First Last", falling back to the username when both are blank
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

/// Tag attached to an item: a nested tag object on reads, a bare
/// primary key when the backend echoes a write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemTag {
    Full(Tag),
    Id(u32),
    Name(String),
}

impl ItemTag {
    /// Text shown in the grid; bare ids render as `#id`
    pub fn label(&self) -> String {
        match self {
            ItemTag::Full(tag) => tag.name.clone(),
            ItemTag::Id(id) => format!("#{}", id),
            ItemTag::Name(name) => name.clone(),
        }
    }
}

/// Django sends `null` for blank optional text columns
fn null_as_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inventory item (matches `ItemGETSerializer`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, alias = "model", deserialize_with = "null_as_empty")]
    pub model_no: String,
    pub quantity: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<ItemTag>,
}

impl Item {
    pub fn tag_labels(&self) -> Vec<String> {
        self.tags.iter().map(ItemTag::label).collect()
    }
}

/// Body of `POST /api/items/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub model_no: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Declared type of a custom field.
///
/// `Unknown` keeps whatever string the backend sent so the renderer can skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Single,
    Multi,
    Int,
    Float,
    Unknown(String),
}

impl FieldType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Single" => FieldType::Single,
            "Multi" => FieldType::Multi,
            "Int" => FieldType::Int,
            "Float" => FieldType::Float,
            other => FieldType::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Single => "Single",
            FieldType::Multi => "Multi",
            FieldType::Int => "Int",
            FieldType::Float => "Float",
            FieldType::Unknown(raw) => raw,
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FieldType::parse(&raw))
    }
}

impl Serialize for FieldType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Custom field descriptor from `GET /api/fields/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub private: bool,
}

/// A descriptor paired with the value typed into the draft
#[derive(Debug, Clone, PartialEq)]
pub struct CustomFieldEntry {
    pub name: String,
    pub field_type: FieldType,
    pub value: String,
}

impl From<CustomFieldDescriptor> for CustomFieldEntry {
    fn from(desc: CustomFieldDescriptor) -> Self {
        Self {
            name: desc.name,
            field_type: desc.field_type,
            value: String::new(),
        }
    }
}

/// Cart entry (matches `CartItemGETSerializer`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u32,
    pub item: Item,
    #[serde(default)]
    pub owner: Option<User>,
    pub quantity: i64,
}

/// Body of `POST /api/cart/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCartItem {
    pub item: u32,
    pub quantity: i64,
}

/// Item request (matches `RequestGETSerializer`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub id: u32,
    pub requester: User,
    pub item: Item,
    pub quantity: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_open: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub open_reason: String,
    pub status: String,
}

/// Body of `POST /api/disburse/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disbursement {
    pub receiver: String,
    pub item: String,
    pub quantity: i64,
    pub reason: String,
}

/// Response of `GET /api/apitoken/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiToken {
    pub token: String,
}
