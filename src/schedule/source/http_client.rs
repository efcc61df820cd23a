//! HTTP client creation and configuration utilities

use crate::config::ProxyConfig;
use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, USER_AGENT};
use reqwest::{Client, Proxy};
use std::time::Duration;
use tracing::debug;

/// Creates the HTTP client used for both schedule pages.
///
/// # Arguments
/// * `timeout_seconds` - Per-request timeout
/// * `proxies` - Proxy settings; ignored unless `enable` is set
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client(
    timeout_seconds: u64,
    proxies: &ProxyConfig,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(USER_AGENT);

    if proxies.enable {
        if let Some(http) = &proxies.http {
            debug!("Using HTTP proxy {http}");
            builder = builder.proxy(Proxy::http(http)?);
        }
        if let Some(https) = &proxies.https {
            debug!("Using HTTPS proxy {https}");
            builder = builder.proxy(Proxy::https(https)?);
        }
    } else {
        builder = builder.no_proxy();
    }

    builder.build()
}
