//! Presentation layer for the result list.
//!
//! Everything here is stateless: frontends own a [`ViewState`] and pass it to
//! [`render`] together with the latest search results.

pub mod render;
pub mod view;

pub use render::{content_height, render, render_entry, RenderOptions};
pub use view::{LoadState, ViewEvent, ViewState, LOAD_FAILED_MESSAGE};
