// src/pipeline/fetch.rs

//! Page fetching backends.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::HttpConfig;
use crate::utils::http;

/// Source of raw page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body at `url`. Non-2xx answers are `AppError::Upstream`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetcher backed by a configured reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_async_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let body = http::fetch_text(&self.client, url).await?;
        log::debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
