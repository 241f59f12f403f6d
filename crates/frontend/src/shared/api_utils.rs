//! API utilities for frontend-backend communication
//!
//! Provides the HTTP client passed to every data source and the error type
//! shared by all requests.

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

use crate::config::AppConfig;

/// Transport-level failure of a request. An empty result is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// given backend port.
///
/// # Returns
/// - API base URL like "http://localhost:6010"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// HTTP client bound to one backend. Constructed once in `App` and provided
/// through context; data sources receive it by value.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone(), config.request_timeout_ms)
    }

    /// Build a full API URL from a path (should start with "/")
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, FetchError> {
        let query = serde_qs::to_string(query).map_err(|e| FetchError::Encode(e.to_string()))?;
        Ok(format!("{}?{}", self.url(path), query))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::debug!("GET {}", url);
        let response = self.with_timeout(Request::get(url).send()).await?;
        Self::decode(response).await
    }

    /// GET returning raw JSON; an empty body reads as `null`
    pub async fn get_value(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        log::debug!("GET {}", url);
        let response = self.with_timeout(Request::get(url).send()).await?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        parse_body(&body)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let request = Request::post(&url)
            .json(body)
            .map_err(|e| FetchError::Encode(e.to_string()))?;
        let response = self.with_timeout(request.send()).await?;
        Self::decode(response).await
    }

    async fn with_timeout<F>(&self, request: F) -> Result<Response, FetchError>
    where
        F: Future<Output = Result<Response, gloo_net::Error>>,
    {
        let request = Box::pin(request);
        let timer = Box::pin(TimeoutFuture::new(self.timeout_ms));
        match select(request, timer).await {
            Either::Left((result, _)) => result.map_err(|e| FetchError::Network(e.to_string())),
            Either::Right(_) => {
                log::warn!("request timed out after {} ms", self.timeout_ms);
                Err(FetchError::Timeout(self.timeout_ms))
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn parse_body(body: &str) -> Result<serde_json::Value, FetchError> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::{FilterState, ListingQuery, PriceRange};

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(parse_body("  "), Ok(serde_json::Value::Null));
        assert_eq!(parse_body("[]"), Ok(serde_json::json!([])));
        assert!(matches!(parse_body("<html>"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_url_building() {
        let client = ApiClient::new("http://localhost:6010/", 1000);
        assert_eq!(
            client.url("/dashboard/getAllCustomers"),
            "http://localhost:6010/dashboard/getAllCustomers"
        );
    }

    #[test]
    fn test_listing_query_string() {
        let client = ApiClient::new("http://localhost:6010", 1000);
        let filters = FilterState {
            search_text: "loft".to_string(),
            price_range: PriceRange::default(),
            minimum_rating: 0.0,
        };
        let url = client
            .url_with_query("/airbnb/getAllListings", &ListingQuery::new(2, 20, &filters))
            .unwrap();
        assert!(url.starts_with("http://localhost:6010/airbnb/getAllListings?pageNo=2&pageSize=20"));
        assert!(url.contains("searchText=loft"));
        assert!(url.contains("priceRange=0"));
        assert!(url.contains("minimumRating=0"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(500).to_string(), "Server error: 500");
        assert_eq!(
            FetchError::Timeout(30000).to_string(),
            "Request timed out after 30000 ms"
        );
    }
}
