//! # Character Repository
//!
//! The interface the view model depends on. The production implementation
//! forwards to a [`CharacterService`]; tests plug in fakes.

use crate::error::FetchError;
use crate::models::Character;
use crate::services::CharacterService;
use async_trait::async_trait;

/// Source of characters for the view model
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Character>, FetchError>;

    async fn search_by_name(&self, query: &str) -> Result<Vec<Character>, FetchError>;
}

/// Repository that delegates straight to a service
#[derive(Debug, Clone)]
pub struct ApiCharacterRepository<S> {
    service: S,
}

impl<S: CharacterService> ApiCharacterRepository<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[async_trait]
impl<S: CharacterService> CharacterRepository for ApiCharacterRepository<S> {
    async fn fetch_all(&self) -> Result<Vec<Character>, FetchError> {
        self.service.fetch_all().await
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Character>, FetchError> {
        self.service.search(query).await
    }
}
