//! Episode model

use serde::Deserialize;

/// An episode record as returned by `/api/episode`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Episode {
    pub id: i64,
    pub name: String,
    pub air_date: String,
    /// Season/episode code, e.g. `S01E01`
    pub episode: String,
    pub characters: Vec<String>,
    pub url: String,
    pub created: String,
}
