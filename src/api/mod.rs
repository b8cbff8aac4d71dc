//! REST API Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain.
//! Every call goes through [`Api`], which owns the base URL and attaches the
//! CSRF header to mutating requests.

mod csrf;
mod endpoints;
mod items;
mod tags;
mod cart;
mod requests;
mod users;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;

pub use csrf::{parse_cookie, read_csrf_token};
pub use endpoints::*;
pub use items::ItemFilter;

/// Unreserved characters stay literal in path segments and query values
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one path segment or query value
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Collection responses, either bare or wrapped by page-number pagination
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Page { results } => results,
            Listing::Plain(list) => list,
        }
    }
}

/// HTTP client bound to a [`ClientConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    config: ClientConfig,
}

impl Api {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn with_csrf(&self, builder: RequestBuilder) -> RequestBuilder {
        match read_csrf_token(&self.config.csrf_cookie) {
            Some(token) => builder.header(&self.config.csrf_header, &token),
            None => {
                log::warn!("[API] no {} cookie, sending request without CSRF token", self.config.csrf_cookie);
                builder
            }
        }
    }

    fn check(method: &'static str, resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            Ok(resp)
        } else {
            Err(ApiError::Status { method, url: resp.url(), status: resp.status() })
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.config.url(path)).send().await?;
        let resp = Self::check("GET", resp)?;
        Self::decode(resp).await
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self.get_json(path).await?;
        Ok(listing.into_vec())
    }

    /// POST or PUT a JSON body, ignoring the reply
    pub(crate) async fn send_json_unit<B: Serialize>(&self, method: &'static str, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_body(method, path, body).await.map(|_| ())
    }

    async fn send_body<B: Serialize>(&self, method: &'static str, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.config.url(path);
        let builder = match method {
            "PUT" => Request::put(&url),
            _ => Request::post(&url),
        };
        let resp = self.with_csrf(builder).json(body)?.send().await?;
        Self::check(method, resp)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.with_csrf(Request::delete(&self.config.url(path))).send().await?;
        Self::check("DELETE", resp).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("10k Resistor"), "10k%20Resistor");
        assert_eq!(encode_segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_segment("model_no-1.2~x"), "model_no-1.2~x");
    }

    #[test]
    fn test_listing_plain() {
        let listing: Listing<u32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(listing.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_listing_paginated() {
        let json = r#"{"count":2,"next":null,"previous":null,"results":[7,8]}"#;
        let listing: Listing<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(listing.into_vec(), vec![7, 8]);
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { method: "POST", url: "/api/items/".to_string(), status: 400 };
        assert_eq!(err.to_string(), "POST /api/items/ returned status 400");
    }
}
