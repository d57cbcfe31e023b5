//! HTTP fetch of the target page.
//!
//! One blocking GET with no timeout: the request either completes or fails.
//! The body is decoded by sniffing its content, since the declared charset
//! of the target site cannot be trusted.

use super::config::ScrapeConfig;
use super::error::{Result, ScrapeError};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Build the blocking client used for the single page request.
///
/// # Errors
///
/// Returns [`ScrapeError::Network`] if the client cannot be constructed.
pub fn build_client(config: &ScrapeConfig) -> Result<Client> {
    let mut builder = Client::builder().timeout(None::<Duration>);
    if let Some(ref ua) = config.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    builder
        .build()
        .map_err(|e| ScrapeError::Network(format!("failed to build HTTP client: {e}")))
}

/// Fetch the configured page and return its decoded text.
///
/// # Errors
///
/// Returns [`ScrapeError::Network`] for an invalid URL, a transport failure,
/// a 4xx/5xx status, or a body that cannot be read.
pub fn fetch_page(config: &ScrapeConfig) -> Result<String> {
    let url = Url::parse(&config.url)
        .map_err(|e| ScrapeError::Network(format!("invalid URL '{}': {e}", config.url)))?;
    let client = build_client(config)?;

    tracing::debug!(%url, "sending request");
    let response = client
        .get(url)
        .send()
        .map_err(|e| ScrapeError::Network(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| ScrapeError::Network(format!("HTTP error: {e}")))?;

    let declared = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = response
        .bytes()
        .map_err(|e| ScrapeError::Network(format!("response read failed: {e}")))?;

    tracing::debug!(
        bytes = body.len(),
        content_type = declared.as_deref().unwrap_or("-"),
        "response received"
    );

    Ok(decode_body(&body))
}

/// Decode a response body using the encoding detected from its bytes.
///
/// A byte order mark wins over the detected encoding. Malformed sequences
/// are replaced rather than rejected.
pub fn decode_body(bytes: &[u8]) -> String {
    let encoding: &'static Encoding = match Encoding::for_bom(bytes) {
        Some((bom_encoding, _)) => bom_encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    tracing::debug!(
        detected = encoding.name(),
        used = used.name(),
        had_errors,
        "decoded response body"
    );
    text.into_owned()
}
