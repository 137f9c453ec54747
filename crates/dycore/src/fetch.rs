//! Page fetching behind the `PageFetcher` seam.
//!
//! `HttpPageFetcher` issues a single GET with the mobile User-Agent and lets
//! reqwest follow the short link's redirect chain to the share page.
//! No retries and no timeouts are added here: the caller's transport stack
//! decides those.

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::core::utils::preview;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::sync::Arc;

/// Source of raw page text for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return the final response body as text.
    async fn fetch_text(&self, url: &str) -> AppResult<String>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        (**self).fetch_text(url).await
    }
}

/// reqwest-backed fetcher. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Build a fetcher honouring `DOUYIN_PROXY`.
    pub fn new() -> AppResult<Self> {
        Self::with_proxy(config::proxy::DOUYIN_PROXY.as_deref())
    }

    /// Build a fetcher with an explicit proxy setting (`None` for a direct connection).
    pub fn with_proxy(proxy_url: Option<&str>) -> AppResult<Self> {
        let mut client_builder = Client::builder();

        if let Some(proxy_url) = proxy_url.and_then(config::proxy::normalize) {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| AppError::Config(format!("invalid proxy URL {}: {}", proxy_url, e)))?;
            log::info!("HttpPageFetcher: using proxy {}", proxy_url);
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing client. The User-Agent is still set per request.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        log::info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, config::douyin::MOBILE_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            // The body is still handed to the scanners, which report what is missing.
            log::warn!("{} resolved to {} with HTTP {}", url, final_url, status);
        }

        let body = response.text().await?;
        log::debug!(
            "Fetched {} bytes from {}: {}",
            body.len(),
            final_url,
            preview(&body, 200)
        );

        Ok(body)
    }
}
