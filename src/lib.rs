//! # charsearch - Reactive Character Search Client
//!
//! Lists and searches characters from the Rick and Morty REST API. The core
//! is a view model that turns raw search text into debounced, cancellable
//! requests and publishes the results as observable state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  push text   ┌──────────────────┐  search   ┌────────────┐   GET    ┌─────────────┐
//! │    View     │─────────────▶│    ViewModel     │──────────▶│ Repository │─────────▶│   Service   │
//! │             │              │                  │           │            │          │             │
//! │ - Renderer  │◀─────────────│ - characters     │◀──────────│ - fetch    │◀─────────│ - reqwest   │
//! │ - Input     │   watch      │ - search_query   │  results  │ - search   │  decode  │ - JSON      │
//! └─────────────┘              │ - load_state     │           └────────────┘          └─────────────┘
//!                              └──────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod view_models;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use cmd_args::CommandLineArgs;
pub use controller::AppController;
pub use error::{ConfigError, FetchError, TransportError};
pub use models::{Character, CharacterPage, Episode, Location};
pub use repository::{ApiCharacterRepository, CharacterRepository};
pub use services::{CharacterApiClient, CharacterService, HttpImageLoader, ImageLoader};
pub use view_models::{CharacterViewModel, LoadState, StateSlot};
pub use views::ListRenderer;
