//! # Data Models
//!
//! Wire types for the character API. All of them are decoded straight from
//! server responses and are never mutated afterwards.

pub mod character;
pub mod episode;

pub use character::{Character, CharacterPage, Location};
pub use episode::Episode;
