//! Core engine module - platform-agnostic business logic.
//!
//! This module contains everything that doesn't depend on a window system or
//! terminal:
//! - Command entries and their parsed examples
//! - Fuzzy ranking search
//! - Stale-result tracking for frontends that search on every keystroke

pub mod command;
pub mod latest;
pub mod search;

pub use command::{CommandEntry, Example, Platform};
pub use latest::{QueryTicket, QueryTracker};
pub use search::{
    fuzzy_score, score_command, search, EmptyQuery, ScoredEntry, SearchEngine, SearchOptions,
    DEFAULT_DESCRIPTION_THRESHOLD, SHORT_QUERY_MAX_LEN,
};
