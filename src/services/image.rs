//! # Image Loader
//!
//! Fetches avatar images by URL. Decoding and display belong to whoever
//! consumes the bytes.

use crate::error::{FetchError, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};

/// Given a URL, asynchronously yield the raw image bytes or fail
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<Bytes, FetchError>;
}

/// reqwest-backed [`ImageLoader`]
#[derive(Debug, Clone, Default)]
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<Bytes, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::RequestBuild {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Loading image {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(TransportError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Image {} returned {}", url, status);
            return Err(TransportError::Status(status).into());
        }

        let body = response.bytes().await.map_err(TransportError::Network)?;
        if body.is_empty() {
            return Err(TransportError::EmptyBody.into());
        }

        tracing::debug!("Loaded image {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
