//! HTTP catalog client.
//!
//! Queries a JSON catalog service with
//! `GET {base}/images?name=<name>[&owner=<owner>...]`, one `owner` parameter
//! per owner in caller order. The service answers `{"images": [...]}`.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use crate::catalog::{Catalog, ImageQuery, ImageRecord};

/// Response body returned by the catalog service.
#[derive(Debug, Deserialize)]
struct ImageListResponse {
    #[serde(default)]
    images: Vec<ImageRecord>,
}

/// Catalog reached over HTTP/HTTPS.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpCatalog {
    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("imagegate")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the catalog base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the lookup URL for a query.
    pub fn query_url(&self, query: &ImageQuery) -> Result<Url> {
        let mut params = vec![("name", query.name.as_str())];
        if let Some(owners) = &query.owners {
            params.extend(owners.iter().map(|owner| ("owner", owner.as_str())));
        }

        let endpoint = format!("{}/images", self.base_url);
        Url::parse_with_params(&endpoint, &params)
            .with_context(|| format!("Invalid catalog URL: {}", endpoint))
    }
}

impl Catalog for HttpCatalog {
    fn query(&self, query: &ImageQuery) -> Result<Vec<ImageRecord>> {
        let url = self.query_url(query)?;
        tracing::debug!("Querying catalog: {}", url);

        let response = self.client.get(url.clone()).send()?;

        if !response.status().is_success() {
            bail!("HTTP {} from {}", response.status(), url);
        }

        let body: ImageListResponse = response
            .json()
            .with_context(|| format!("Malformed catalog response from {}", url))?;

        Ok(body.images)
    }
}
