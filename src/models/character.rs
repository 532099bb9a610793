//! Character model
//!
//! A `Character` is decoded from one element of the `results` array. Unknown
//! fields are ignored; a missing required field fails the whole page.

use serde::Deserialize;

/// A character record as returned by `/api/character`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: Location,
    pub location: Location,
    /// Avatar URL
    pub image: String,
    /// Episode URLs in broadcast order
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

/// Origin or last known location of a character
///
/// The server omits everything but `name` (and sometimes even that) for
/// unknown places, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub dimension: Option<String>,
    #[serde(default)]
    pub residents: Option<Vec<String>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
}

impl Location {
    /// Display name, falling back to "unknown"
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "unknown",
        }
    }
}

/// Response envelope of the character endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterPage {
    pub results: Vec<Character>,
}
