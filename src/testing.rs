//! Testing infrastructure shared by unit tests
//!
//! Provides character fixtures and a scripted repository whose answers,
//! delays and failures are set up per query, so timing-sensitive pipeline
//! behavior can be driven deterministically under a paused tokio clock.

use crate::error::{FetchError, TransportError};
use crate::models::{Character, Location};
use crate::repository::CharacterRepository;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Build a character with the given id and name and plausible other fields
pub fn sample_character(id: i64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        kind: String::new(),
        gender: "Male".to_string(),
        origin: Location {
            name: Some("Earth (C-137)".to_string()),
            ..Location::default()
        },
        location: Location::default(),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
        url: format!("https://rickandmortyapi.com/api/character/{id}"),
        created: "2017-11-04T18:48:46.250Z".to_string(),
    }
}

/// One recorded repository call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    FetchAll,
    Search(String),
}

#[derive(Debug, Clone)]
enum Outcome {
    Characters(Vec<Character>),
    Failure(StatusCode),
}

#[derive(Debug, Clone)]
struct Scripted {
    delay: Duration,
    outcome: Outcome,
}

impl Scripted {
    fn into_result(self) -> Result<Vec<Character>, FetchError> {
        match self.outcome {
            Outcome::Characters(characters) => Ok(characters),
            Outcome::Failure(status) => Err(TransportError::Status(status).into()),
        }
    }
}

/// Fake repository answering from a script
///
/// Unscripted searches answer immediately with a single character named
/// after the query. An unscripted `fetch_all` answers immediately with
/// three characters.
#[derive(Debug, Default)]
pub struct ScriptedRepository {
    calls: Mutex<Vec<RepositoryCall>>,
    searches: Mutex<HashMap<String, Scripted>>,
    fetch_all: Mutex<Option<Scripted>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `characters` after `delay`
    pub fn with_search(self, query: &str, delay: Duration, characters: Vec<Character>) -> Self {
        self.searches.lock().unwrap().insert(
            query.to_string(),
            Scripted {
                delay,
                outcome: Outcome::Characters(characters),
            },
        );
        self
    }

    /// Fail `query` with a 500 after `delay`
    pub fn with_failed_search(self, query: &str, delay: Duration) -> Self {
        self.searches.lock().unwrap().insert(
            query.to_string(),
            Scripted {
                delay,
                outcome: Outcome::Failure(StatusCode::INTERNAL_SERVER_ERROR),
            },
        );
        self
    }

    pub fn with_fetch_all(self, characters: Vec<Character>) -> Self {
        *self.fetch_all.lock().unwrap() = Some(Scripted {
            delay: Duration::ZERO,
            outcome: Outcome::Characters(characters),
        });
        self
    }

    /// Fail `fetch_all` with `status` after `delay`
    pub fn with_failed_fetch_all(self, status: StatusCode, delay: Duration) -> Self {
        *self.fetch_all.lock().unwrap() = Some(Scripted {
            delay,
            outcome: Outcome::Failure(status),
        });
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Queries of the search calls made so far, in order
    pub fn search_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RepositoryCall::Search(query) => Some(query),
                RepositoryCall::FetchAll => None,
            })
            .collect()
    }
}

#[async_trait]
impl CharacterRepository for ScriptedRepository {
    async fn fetch_all(&self) -> Result<Vec<Character>, FetchError> {
        self.calls.lock().unwrap().push(RepositoryCall::FetchAll);
        let scripted = self.fetch_all.lock().unwrap().clone().unwrap_or(Scripted {
            delay: Duration::ZERO,
            outcome: Outcome::Characters(vec![
                sample_character(1, "Rick Sanchez"),
                sample_character(2, "Morty Smith"),
                sample_character(3, "Summer Smith"),
            ]),
        });
        tokio::time::sleep(scripted.delay).await;
        scripted.into_result()
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Character>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push(RepositoryCall::Search(query.to_string()));
        let scripted = self
            .searches
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Scripted {
                delay: Duration::ZERO,
                outcome: Outcome::Characters(vec![sample_character(100, query)]),
            });
        tokio::time::sleep(scripted.delay).await;
        scripted.into_result()
    }
}
