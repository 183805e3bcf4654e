use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::types::RawCatalog;

/// One-shot catalog download: single attempt, no retry, no caching.
pub struct CatalogFetcher {
    client: reqwest::Client,
    url: String,
}

impl CatalogFetcher {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.catalog.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            url: config.catalog.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the remote catalog document. Any non-200 status
    /// is a fetch failure; transport errors propagate as `Http`.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<RawCatalog> {
        debug!("requesting catalog document");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::Fetch {
                message: format!("catalog request returned HTTP {status}"),
            });
        }

        let raw: RawCatalog = response.json().await?;
        info!("catalog document fetched");
        Ok(raw)
    }
}
