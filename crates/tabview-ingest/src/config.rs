//! Configuration for fetching a batch from a remote provider.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default record provider.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Number of records requested per batch.
pub const DEFAULT_RESULTS: u32 = 20;

/// Field projected out of every fetched user.
pub const DEFAULT_SELECT: &str = "location";

/// Settings for one bulk read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the provider.
    pub endpoint: String,

    /// Fixed result count sent as the `results` query parameter.
    pub results: u32,

    /// Request timeout. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,

    /// Dotted path projected out of every record (e.g. `location`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
            timeout: None,
            select: Some(DEFAULT_SELECT.to_string()),
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_results(mut self, results: u32) -> Self {
        self.results = results;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_select(mut self, select: Option<String>) -> Self {
        self.select = select;
        self
    }

    /// Full request URL, e.g. `https://randomuser.me/api/?results=20`.
    pub fn request_url(&self) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{separator}results={}", self.endpoint, self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_url() {
        assert_eq!(
            FetchConfig::default().request_url(),
            "https://randomuser.me/api/?results=20"
        );
    }

    #[test]
    fn request_url_appends_to_existing_query() {
        let config = FetchConfig::default()
            .with_endpoint("http://localhost:8080/api?seed=abc")
            .with_results(5);
        assert_eq!(
            config.request_url(),
            "http://localhost:8080/api?seed=abc&results=5"
        );
    }
}
