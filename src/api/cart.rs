//! Cart Endpoints

use serde::Serialize;

use super::{cart_item_path, Api, ApiError, CART};
use crate::models::{CartItem, NewCartItem};

#[derive(Serialize)]
struct QuantityBody {
    quantity: i64,
}

impl Api {
    pub async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get_list(CART).await
    }

    pub async fn add_to_cart(&self, entry: &NewCartItem) -> Result<(), ApiError> {
        self.send_json_unit("POST", CART, entry).await
    }

    pub async fn update_cart_quantity(&self, id: u32, quantity: i64) -> Result<(), ApiError> {
        self.send_json_unit("PUT", &cart_item_path(id), &QuantityBody { quantity }).await
    }

    pub async fn remove_from_cart(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&cart_item_path(id)).await
    }
}
