//! Tag Endpoints

use super::{Api, ApiError, TAGS};
use crate::models::Tag;

impl Api {
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_list(TAGS).await
    }
}
