//! # ViewModels
//!
//! Presentation state and the logic that keeps it current. Views only read
//! from here (through `watch` receivers) and push input back in.

pub mod character_view_model;
pub mod state;

pub use character_view_model::{CharacterViewModel, DEFAULT_DEBOUNCE};
pub use state::{LoadState, StateSlot};
