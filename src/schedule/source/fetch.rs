//! Page retrieval with retry logic and status-code error mapping

use crate::config::Config;
use crate::constants::retry::{INITIAL_BACKOFF_MS, MAX_RETRIES};
use crate::error::AppError;
use crate::schedule::source::http_client::create_http_client;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Fetches schedule pages over HTTP.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    client: Client,
}

impl DocumentSource {
    /// Builds the client from the configured timeout and proxies.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client(config.http_timeout_seconds, &config.proxies)?;
        Ok(DocumentSource { client })
    }

    /// Fetches the body of a schedule page.
    ///
    /// This function:
    /// - Retries failures that `AppError::is_retryable` accepts (timeouts,
    ///   connection failures, 429 and 5xx responses) with exponential backoff
    /// - Respects numeric Retry-After headers
    /// - Maps the final non-success status to a specific error
    ///
    /// # Returns
    /// * `Ok(String)` - The page body
    /// * `Err(AppError)` - The page could not be retrieved
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String, AppError> {
        info!("Fetching schedule page: {url}");

        let mut attempt = 0u32;
        let mut backoff = Duration::from_millis(INITIAL_BACKOFF_MS);
        let response = loop {
            let (err, wait_hint) = match self.client.get(url).send().await {
                Ok(resp) if resp.status().is_success() => break resp,
                Ok(resp) => (status_error(resp.status(), url), retry_after(&resp)),
                Err(e) => (request_error(e, url), None),
            };

            if !err.is_retryable() || attempt >= MAX_RETRIES {
                error!("Request failed for URL {url}: {err}");
                return Err(err);
            }

            let wait = wait_hint.unwrap_or(backoff);
            warn!(
                "{}. Retrying in {:?} (attempt {}/{})",
                err,
                wait,
                attempt + 1,
                MAX_RETRIES
            );
            tokio::time::sleep(wait).await;
            attempt += 1;
            backoff = backoff.saturating_mul(2);
        };

        debug!("Response status: {}", response.status());

        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body from URL {}: {}", url, e);
            AppError::SourceFetch(e)
        })?;

        debug!("Response length: {} bytes", body.len());
        if body.trim().is_empty() {
            return Err(AppError::source_no_data("Response body is empty", url));
        }

        Ok(body)
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn request_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::SourceFetch(e)
    }
}

/// Maps a non-success HTTP status to the matching error.
pub fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::source_not_found(url),
        429 => AppError::source_rate_limit(reason, url),
        502 | 503 => AppError::source_service_unavailable(status_code, reason, url),
        400..=499 => AppError::source_client_error(status_code, reason, url),
        _ => AppError::source_server_error(status_code, reason, url),
    }
}
