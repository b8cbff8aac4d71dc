//! Request Endpoints
//!
//! Listing a user's requests and turning the cart into requests.

use serde::Serialize;

use super::{with_query, Api, ApiError, REQUESTS};
use crate::models::ItemRequest;

#[derive(Serialize)]
struct OpenReasonBody<'a> {
    open_reason: &'a str,
}

impl Api {
    /// `status` of "" lists every request
    pub async fn list_requests(&self, status: &str) -> Result<Vec<ItemRequest>, ApiError> {
        let path = with_query(REQUESTS, &[("status", status.to_string())]);
        self.get_list(&path).await
    }

    /// Submit everything in the cart as requests
    pub async fn submit_cart(&self, open_reason: &str) -> Result<(), ApiError> {
        self.send_json_unit("POST", REQUESTS, &OpenReasonBody { open_reason }).await
    }
}
