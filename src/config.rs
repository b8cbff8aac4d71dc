//! Client Configuration
//!
//! Endpoint base and CSRF settings, with optional overrides from `<meta>` tags.

/// Settings shared by every API call and the router
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every REST path ("" = same origin)
    pub api_base: String,
    /// Cookie holding the anti-forgery token
    pub csrf_cookie: String,
    /// Header the backend expects the token in
    pub csrf_header: String,
    /// Route prefix for the app screens
    pub app_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            app_prefix: "/app".to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `<meta name="kip-api-base">` and
    /// `<meta name="kip-csrf-cookie">` when present.
    pub fn from_document() -> Self {
        let mut config = Self::default();
        if let Some(base) = read_meta("kip-api-base") {
            config.api_base = normalize_base(&base);
        }
        if let Some(cookie) = read_meta("kip-csrf-cookie") {
            if !cookie.trim().is_empty() {
                config.csrf_cookie = cookie.trim().to_string();
            }
        }
        config
    }

    /// Join the API base with a path that starts with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Link to the detail page of an inventory item
    pub fn item_page(&self, name: &str) -> String {
        format!("{}/inventory/{}/", self.app_prefix, crate::api::encode_segment(name))
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.url("/api/fields/"), "/api/fields/");
    }

    #[test]
    fn test_url_with_base() {
        let config = ClientConfig {
            api_base: normalize_base(" https://kip.example.com/ "),
            ..Default::default()
        };
        assert_eq!(config.url("/api/items/"), "https://kip.example.com/api/items/");
    }

    #[test]
    fn test_item_page_encodes_name() {
        let config = ClientConfig::default();
        assert_eq!(config.item_page("10k Resistor"), "/app/inventory/10k%20Resistor/");
    }
}
