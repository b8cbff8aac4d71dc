//! Endpoint Paths
//!
//! Every REST path the UI talks to, relative to the API base.

use super::encode_segment;

pub const CURRENT_USER: &str = "/api/users/current/.json";
pub const USERS: &str = "/api/users/";
pub const FIELDS: &str = "/api/fields/";
pub const ITEMS: &str = "/api/items/";
pub const TAGS: &str = "/api/tags/";
pub const CART: &str = "/api/cart/";
pub const REQUESTS: &str = "/api/requests/";
pub const DISBURSE: &str = "/api/disburse/";
pub const API_TOKEN: &str = "/api/apitoken/";

/// `PUT` target for one custom field value of one item
pub fn item_field_path(item_name: &str, field_name: &str) -> String {
    format!(
        "/api/items/{}/fields/{}/",
        encode_segment(item_name),
        encode_segment(field_name)
    )
}

pub fn cart_item_path(id: u32) -> String {
    format!("/api/cart/{}/", id)
}

/// Append `?k=v&...`, dropping empty values
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let query = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, encode_segment(value)))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_field_path() {
        assert_eq!(item_field_path("Oscilloscope", "serial"), "/api/items/Oscilloscope/fields/serial/");
        assert_eq!(
            item_field_path("Power Supply", "Rated V"),
            "/api/items/Power%20Supply/fields/Rated%20V/"
        );
    }

    #[test]
    fn test_cart_item_path() {
        assert_eq!(cart_item_path(12), "/api/cart/12/");
    }

    #[test]
    fn test_with_query_skips_empty() {
        let path = with_query(ITEMS, &[("search", "".to_string()), ("tags", "a,b".to_string())]);
        assert_eq!(path, "/api/items/?tags=a%2Cb");
        assert_eq!(with_query(ITEMS, &[("search", String::new())]), ITEMS);
    }
}
