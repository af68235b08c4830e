//! HTTP fetch utilities for the Koala browser.
//!
//! Provides simple blocking HTTP GET wrappers used by the document loader,
//! stylesheet fetcher, and image loader.
//!
//! TODO: Implement proper Fetch Standard (<https://fetch.spec.whatwg.org/>)

use std::time::Duration;

use thiserror::Error;

/// Failure kinds the calling loader can surface at the application boundary.
///
/// The HTML parsing core itself never fails (see its error-handling design:
/// it records recoverable parse errors and otherwise proceeds). These
/// variants cover the collaborators that sit in front of it — the network
/// fetch and the response's declared content type — which can fail outright
/// before there is any HTML to hand the tokenizer.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The HTTP client could not be constructed or the request did not
    /// complete (DNS failure, connection refused, timeout, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server responded with a non-2xx/3xx status code.
    #[error("http error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response's `Content-Type` header names a type this client does
    /// not know how to parse as HTML.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
}

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns an error string if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_text(url: &str) -> Result<String, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .map_err(|e| format!("Failed to read response body: {e}"))
}

/// Fetch a URL and return its body as raw bytes.
///
/// # Errors
///
/// Returns an error string if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be read.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .bytes()
        .map(|b| b.to_vec())
        .map_err(|e| format!("Failed to read response body: {e}"))
}

/// Fetch a URL and return its body as text, enforcing the two checks the
/// HTML loader is responsible for: a successful status code and an
/// HTML-compatible content type. No encoding sniffing is performed beyond
/// what [`reqwest`] does automatically from the response's charset.
///
/// # Errors
///
/// Returns [`LoadError::Request`] if the request itself fails,
/// [`LoadError::HttpStatus`] for a non-2xx/3xx response, or
/// [`LoadError::UnsupportedContentType`] if the response declares a
/// `Content-Type` other than `text/html` (a missing header is treated
/// permissively, matching how a minimal browser would proceed).
pub fn load_html(url: &str) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder().timeout(TIMEOUT).build()?;

    let response = client.get(url).header("User-Agent", USER_AGENT).send()?;

    let status = response.status();
    if !status.is_success() && !status.is_redirection() {
        return Err(LoadError::HttpStatus(status));
    }

    if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or_default();
        if !content_type.is_empty() && !content_type.contains("text/html") {
            return Err(LoadError::UnsupportedContentType(content_type.to_string()));
        }
    }

    Ok(response.text()?)
}
