//! # HTTP Fetch Client
//!
//! Issues `GET /api/character[?name=<query>]` and decodes the
//! `{"results": [...]}` envelope into characters.
//!
//! The futures returned here own the underlying reqwest request, so dropping
//! or aborting them cancels the request and nothing is ever delivered.

use crate::error::{FetchError, TransportError};
use crate::models::{Character, CharacterPage};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Instant;

/// Public host of the character API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com";

/// Path of the character collection, appended to the base URL
pub const CHARACTER_PATH: &str = "/api/character";

/// Query parameter used for name filtering
const NAME_PARAM: &str = "name";

/// Transport-level access to the character collection
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Fetch the unfiltered collection
    async fn fetch_all(&self) -> Result<Vec<Character>, FetchError>;

    /// Fetch characters whose name matches `query`.
    /// An empty query is the same request as [`CharacterService::fetch_all`].
    async fn search(&self, query: &str) -> Result<Vec<Character>, FetchError>;
}

/// reqwest-backed implementation of [`CharacterService`]
#[derive(Debug, Clone)]
pub struct CharacterApiClient {
    client: Client,
    endpoint: Url,
}

impl CharacterApiClient {
    /// Create a client for the given base URL with a default reqwest client
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        let endpoint = Self::endpoint_for(base_url)?;
        tracing::debug!("Character endpoint resolved to {}", endpoint);
        Ok(Self { client, endpoint })
    }

    /// Build the collection URL from a base URL, keeping any path prefix
    fn endpoint_for(base_url: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(base_url).map_err(|e| FetchError::RequestBuild {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(FetchError::RequestBuild {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let path = format!("{}{}", url.path().trim_end_matches('/'), CHARACTER_PATH);
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    /// The collection URL without any query
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL for a request, with the name filter appended when the query is non-empty
    pub fn request_url(&self, query: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair(NAME_PARAM, query);
        }
        url
    }

    async fn get_characters(&self, query: Option<&str>) -> Result<Vec<Character>, FetchError> {
        let url = self.request_url(query);
        let start_time = Instant::now();
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Request to {} failed: {}", url, e);
                TransportError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Request to {} returned {}", url, status);
            return Err(TransportError::Status(status).into());
        }

        let body = response.bytes().await.map_err(TransportError::Network)?;
        if body.is_empty() {
            tracing::warn!("Request to {} returned an empty body", url);
            return Err(TransportError::EmptyBody.into());
        }

        let page = decode_page(&body)?;
        tracing::debug!(
            "GET {} returned {} characters in {}ms",
            url,
            page.results.len(),
            start_time.elapsed().as_millis()
        );
        Ok(page.results)
    }
}

#[async_trait]
impl CharacterService for CharacterApiClient {
    async fn fetch_all(&self) -> Result<Vec<Character>, FetchError> {
        self.get_characters(None).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Character>, FetchError> {
        self.get_characters(Some(query)).await
    }
}

/// Decode a response body into a character page
pub fn decode_page(body: &[u8]) -> Result<CharacterPage, FetchError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Failed to decode character page: {}", e);
        FetchError::Decode(e)
    })
}
