//! UI Components
//!
//! Reusable Leptos components.

mod tag_multi_select;
mod select_filter;
mod search_bar;
mod custom_field_input;
mod status_banner;
mod confirm_remove_button;
mod inventory_grid_header;
mod item_creation_form;
mod api_token_panel;
mod disbursement_panel;
mod kip_nav;

pub use tag_multi_select::TagMultiSelect;
pub use select_filter::SelectFilter;
pub use search_bar::SearchBar;
pub use custom_field_input::CustomFieldInput;
pub use status_banner::StatusBanner;
pub use confirm_remove_button::{ConfirmRemoveButton, ROW_BUTTON_CLASS};
pub use inventory_grid_header::InventoryGridHeader;
pub use item_creation_form::ItemCreationForm;
pub use api_token_panel::ApiTokenPanel;
pub use disbursement_panel::DisbursementPanel;
pub use kip_nav::KipNav;
