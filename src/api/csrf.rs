//! CSRF Token
//!
//! Reads the anti-forgery token the backend sets as a cookie.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Find `name` in a `document.cookie` string and return its decoded value
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

/// Read the token from the live document
pub fn read_csrf_token(cookie_name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    parse_cookie(&cookies, cookie_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_finds_value() {
        let cookies = "sessionid=abc; csrftoken=Xy12Z; theme=dark";
        assert_eq!(parse_cookie(cookies, "csrftoken"), Some("Xy12Z".to_string()));
    }

    #[test]
    fn test_parse_cookie_missing() {
        assert_eq!(parse_cookie("sessionid=abc", "csrftoken"), None);
        assert_eq!(parse_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_parse_cookie_ignores_prefix_match() {
        let cookies = "xcsrftoken=wrong; csrftoken=right";
        assert_eq!(parse_cookie(cookies, "csrftoken"), Some("right".to_string()));
    }

    #[test]
    fn test_parse_cookie_decodes() {
        assert_eq!(parse_cookie("csrftoken=a%3Db", "csrftoken"), Some("a=b".to_string()));
    }
}
