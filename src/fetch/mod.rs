// src/fetch/mod.rs

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{error, info, instrument};
use url::Url;

use crate::error::{Result, VerifyError};

/// Where the sheet text comes from. One call per submission; implementations
/// must not cache.
#[async_trait]
pub trait CsvSource: Send + Sync {
    async fn fetch_text(&self) -> Result<String>;
}

/// Fetches a published sheet's CSV export over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCsvSource {
    client: Client,
    url: Url,
}

impl HttpCsvSource {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Build a client with the given request timeout.
    pub fn with_timeout(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    #[instrument(level = "info", skip(self), fields(url = %self.url))]
    async fn fetch_text(&self) -> Result<String> {
        let resp = self
            .client
            .get(self.url.clone())
            .header(header::CACHE_CONTROL, "no-cache, no-store")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| {
                error!("request failed: {}", e);
                VerifyError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            error!(%status, "sheet fetch returned non-success status");
            return Err(VerifyError::Network(format!("HTTP error: {}", status)));
        }

        let text = resp.text().await.map_err(|e| {
            error!("reading body failed: {}", e);
            VerifyError::Network(e.to_string())
        })?;
        info!(bytes = text.len(), "fetched sheet");
        Ok(text)
    }
}
