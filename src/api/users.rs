//! User Endpoints
//!
//! Current user, user directory, API tokens and staff disbursements.

use super::{Api, ApiError, API_TOKEN, CURRENT_USER, DISBURSE, USERS};
use crate::models::{ApiToken, Disbursement, User};

impl Api {
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json(CURRENT_USER).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list(USERS).await
    }

    pub async fn fetch_api_token(&self) -> Result<String, ApiError> {
        let token: ApiToken = self.get_json(API_TOKEN).await?;
        Ok(token.token)
    }

    pub async fn disburse(&self, disbursement: &Disbursement) -> Result<(), ApiError> {
        self.send_json_unit("POST", DISBURSE, disbursement).await
    }
}
