//! Application configuration
//!
//! Values are fixed at build time; the API base URL can be overridden with
//! the `DASHBOARD_API_BASE` environment variable when building with trunk.

use crate::shared::api_utils::api_base;

/// Port of the REST backend when the base URL is derived from the page location
pub const DEFAULT_API_PORT: u16 = 6010;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    /// Items per page for infinite scroll and tables
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Distance to the bottom of the page (px) that triggers the next page
    pub scroll_threshold_px: f64,
    pub scroll_debounce_ms: u32,
    /// Product search waits for the user to stop typing
    pub search_debounce_ms: u32,
    pub customer_search_debounce_ms: u32,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: format!("http://localhost:{}", DEFAULT_API_PORT),
            page_size: 20,
            page_size_options: vec![20, 50, 100],
            scroll_threshold_px: 200.0,
            scroll_debounce_ms: 100,
            search_debounce_ms: 1000,
            customer_search_debounce_ms: 300,
            request_timeout_ms: 30_000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base = match option_env!("DASHBOARD_API_BASE") {
            Some(base) if !base.trim().is_empty() => base.trim().trim_end_matches('/').to_string(),
            _ => api_base(DEFAULT_API_PORT),
        };
        Self::default().with_api_base(api_base)
    }

    /// Empty base (no window, e.g. in tests) keeps the default
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        if !api_base.is_empty() {
            self.api_base = api_base;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://localhost:6010");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.scroll_threshold_px, 200.0);
        assert_eq!(config.scroll_debounce_ms, 100);
        assert_eq!(config.page_size_options, vec![20, 50, 100]);
        assert!(config.page_size_options.contains(&config.page_size));
    }

    #[test]
    fn test_empty_base_keeps_default() {
        let config = AppConfig::default().with_api_base("");
        assert_eq!(config.api_base, "http://localhost:6010");
        let config = AppConfig::default().with_api_base("https://api.example.com");
        assert_eq!(config.api_base, "https://api.example.com");
    }
}
