//! Blocking HTTP fetch of one record batch.
//!
//! One request, no retry, no caching. Failures are returned to the caller,
//! which decides whether to continue with an empty batch.

use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, info};

use tabview_model::SourceRecord;

use crate::config::FetchConfig;
use crate::error::{IngestError, Result};
use crate::payload::{parse_payload, select_field};

/// Value sent in the `User-Agent` header.
fn user_agent() -> String {
    format!("tabview/{}", env!("CARGO_PKG_VERSION"))
}

fn build_client(config: &FetchConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Fetch a batch of records from the configured provider.
pub fn fetch_records(config: &FetchConfig) -> Result<Vec<SourceRecord>> {
    let url = config.request_url();
    let client = build_client(config)?;
    let start = Instant::now();
    debug!(%url, "fetching records");

    let response = client
        .get(&url)
        .header(USER_AGENT, user_agent())
        .header(ACCEPT, "application/json")
        .send()?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(IngestError::Status { status, message });
    }

    let body = response.text()?;
    let records = parse_payload(&body)?;
    let fetched = records.len();
    let records = match config.select.as_deref() {
        Some(path) => select_field(records, path),
        None => records,
    };
    info!(
        %url,
        fetched,
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "fetch complete"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_and_without_timeout() {
        let config = FetchConfig::default();
        assert!(build_client(&config).is_ok());
        let config = config.with_timeout(Some(std::time::Duration::from_secs(5)));
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn user_agent_names_the_tool() {
        assert!(user_agent().starts_with("tabview/"));
    }
}
