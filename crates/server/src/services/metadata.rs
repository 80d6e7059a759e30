use std::time::Duration;
use thiserror::Error;
use url::Url;

use scrape::PageMetadata;

/// Upper bound on the metadata fetch; a slow page must not block item
/// creation indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("curio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Service for fetching a page and scraping its metadata
pub struct MetadataService {
    client: reqwest::Client,
}

impl MetadataService {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL and extract page metadata from its HTML.
    ///
    /// Fetch failures surface as errors; the extraction itself never fails,
    /// missing signals simply come back empty.
    pub async fn fetch_metadata(&self, url: &str) -> Result<PageMetadata, MetadataError> {
        Url::parse(url).map_err(|e| MetadataError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;

        Ok(scrape::extract(&html, url))
    }
}
