//! Remote source retrieval
//!
//! Only GitHub file URLs are supported. Browser links (`github.com/.../blob/...`) are
//! rewritten to their raw form before download.

use std::time::Duration;

use tracing::info;

use crate::error::{RecognizerError, Result};

const USER_AGENT: &str = concat!("algo-recognizer/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// True for identifiers that must be downloaded rather than read from disk
pub fn is_remote(identifier: &str) -> bool {
    identifier.starts_with("http://") || identifier.starts_with("https://")
}

/// Convert a GitHub file URL to its raw-content form.
///
/// `https://github.com/o/r/blob/main/a.py` becomes
/// `https://raw.githubusercontent.com/o/r/main/a.py`. URLs already pointing at raw
/// content pass through unchanged.
pub fn github_raw_url(url: &str) -> Result<String> {
    if !url.contains("github.com") && !url.contains("/blob/") {
        return Err(RecognizerError::InvalidUrl {
            url: url.to_string(),
        });
    }

    let raw = if url.contains("raw.githubusercontent.com") {
        url.to_string()
    } else {
        url.replacen("github.com", "raw.githubusercontent.com", 1)
    };
    Ok(raw.replacen("/blob/", "/", 1))
}

/// Download the text behind a GitHub file URL
pub async fn fetch_source(url: &str) -> Result<String> {
    let raw_url = github_raw_url(url)?;
    info!("Fetching source from: {}", raw_url);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| RecognizerError::FetchFailure {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

    let response = client
        .get(&raw_url)
        .send()
        .await
        .map_err(|e| RecognizerError::FetchFailure {
            message: format!("Failed to fetch {}: {}", raw_url, e),
        })?;

    if !response.status().is_success() {
        return Err(RecognizerError::FetchFailure {
            message: format!("Server returned HTTP {}: {}", response.status(), raw_url),
        });
    }

    response
        .text()
        .await
        .map_err(|e| RecognizerError::FetchFailure {
            message: format!("Failed to read response: {}", e),
        })
}
