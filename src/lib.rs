//! tldr - simplified command reference for developers.
//!
//! A curated list of shell commands, searchable by name and description, with
//! short usage examples for each.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`core`] - Command entries and the fuzzy ranking search engine
//! - [`data`] - Bundled dataset, loading and validation
//! - [`config`] - Configuration loading and management
//! - [`ui`] - Caller-owned view state and stateless text rendering
//! - [`platform`] - Window capability used to size a results window
//! - [`cli`] - Terminal frontend
//!
//! # Example
//!
//! ```
//! use tldr::core::SearchEngine;
//!
//! let commands = tldr::data::bundled().expect("bundled dataset is valid");
//! let engine = SearchEngine::new();
//!
//! let results = engine.search("grep", &commands);
//! assert_eq!(results[0].name, "grep");
//! ```

// Public modules
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod logging;
pub mod platform;
pub mod ui;

// Internal modules
mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use core::{CommandEntry, Platform, SearchEngine, SearchOptions};
pub use error::{TldrError, TldrResult};
