//! # Views
//!
//! Output side of the terminal front end.

pub mod list_renderer;

pub use list_renderer::ListRenderer;
