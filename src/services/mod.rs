//! # Services Layer
//!
//! Wrappers around external resources: the character API and image URLs.
//! Nothing in here holds application state.

pub mod http;
pub mod image;

pub use http::{CharacterApiClient, CharacterService, CHARACTER_PATH, DEFAULT_BASE_URL};
pub use image::{HttpImageLoader, ImageLoader};
