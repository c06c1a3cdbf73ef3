//! Manifest sources.

use std::future::Future;

use crate::web::dto::SoundListResponse;
use crate::{Result, SoundboardError};

/// Somewhere the list of playable clip URLs comes from.
pub trait ManifestSource {
    /// Fetch the current list of clip URLs.
    fn fetch(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Manifest fetched from a running server's listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpManifestSource {
    /// Create a source for the server at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a source sharing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the listing endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/sounds", self.base_url)
    }
}

impl ManifestSource for HttpManifestSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.endpoint()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SoundboardError::Http(format!(
                "failed to load sounds: {status}"
            )));
        }

        let manifest: SoundListResponse = response.json().await?;
        Ok(manifest.sounds.into_iter().map(|s| s.url).collect())
    }
}

/// Fixed in-memory manifest.
#[derive(Debug, Clone, Default)]
pub struct StaticManifestSource {
    urls: Vec<String>,
}

impl StaticManifestSource {
    /// Create a source that always returns `urls`.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }
}

impl ManifestSource for StaticManifestSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        Ok(self.urls.clone())
    }
}
