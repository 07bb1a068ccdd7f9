//! Caller-owned view state for the result list.

use std::collections::HashSet;

use crate::core::CommandEntry;
use crate::error::TldrError;

/// Generic message shown when the dataset cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load commands. Please try again later.";

/// Whether the dataset is available yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready { total: usize },
}

impl LoadState {
    /// Turn a dataset load result into a state, logging the real error.
    pub fn from_load(result: &Result<Vec<CommandEntry>, TldrError>) -> Self {
        match result {
            Ok(commands) => LoadState::Ready {
                total: commands.len(),
            },
            Err(e) => {
                tracing::error!("Error loading commands: {}", e);
                LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        }
    }
}

/// Events a frontend feeds into [`ViewState::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    QueryChanged(String),
    SelectNext,
    SelectPrevious,
    /// Show all or only the first few examples of the result at `index`
    ToggleExpanded { name: String, index: usize },
}

/// Presentation state the frontend owns and passes to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub selected_index: usize,
    expanded: HashSet<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event. `result_count` is the length of the current result list.
    pub fn update(&mut self, event: ViewEvent, result_count: usize) {
        match event {
            ViewEvent::QueryChanged(query) => self.set_query(query),
            ViewEvent::SelectNext => {
                if result_count > 0 {
                    self.selected_index = (self.selected_index + 1) % result_count;
                }
            }
            ViewEvent::SelectPrevious => {
                if result_count > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        result_count - 1
                    } else {
                        self.selected_index - 1
                    };
                }
            }
            ViewEvent::ToggleExpanded { name, index } => self.toggle_expanded(&name, index),
        }
    }

    /// Replace the query. A new query means a new result list, so selection
    /// and expanded sections start over.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.selected_index = 0;
            self.expanded.clear();
        }
    }

    pub fn toggle_expanded(&mut self, name: &str, index: usize) {
        let key = expansion_key(name, index);
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    pub fn is_expanded(&self, name: &str, index: usize) -> bool {
        self.expanded.contains(&expansion_key(name, index))
    }
}

fn expansion_key(name: &str, index: usize) -> String {
    format!("{}-{}", name, index)
}
