//! Search engine for tldr - fuzzy ranking of command entries.
//!
//! Scoring works per field: an exact substring hit scores by how tightly the
//! query fills the target, anything else falls back to an in-order
//! subsequence scan that rewards consecutive runs. Name hits always outrank
//! description hits, and queries of one or two characters only ever match
//! command names.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::command::CommandEntry;

/// Queries at or below this many characters only match command names.
pub const SHORT_QUERY_MAX_LEN: usize = 2;

/// Minimum description score (exclusive) for a description-only match.
///
/// Lower values surface more loosely related commands, higher values keep
/// only tight description hits. At 75 a four-letter word inside a
/// ~27-character description still matches.
pub const DEFAULT_DESCRIPTION_THRESHOLD: u32 = 75;

/// Added to name hits for long queries so they outrank every description hit.
const NAME_MATCH_BONUS: u32 = 1000;

/// Added to name hits for short queries.
const SHORT_NAME_MATCH_BONUS: u32 = 2000;

/// Score of a substring hit where query and target have the same length.
const EXACT_MATCH_BASE: i64 = 100;

/// What to show when the trimmed query is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyQuery {
    /// Show nothing until the user types something
    #[default]
    Hide,
    /// Show every command in dataset order
    BrowseAll,
}

/// Tunables for a [`SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub description_threshold: u32,
    pub empty_query: EmptyQuery,
    /// Cap on returned results, applied after dedup. `None` means unlimited.
    pub max_results: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            description_threshold: DEFAULT_DESCRIPTION_THRESHOLD,
            empty_query: EmptyQuery::Hide,
            max_results: None,
        }
    }
}

/// A command together with the score it got for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CommandEntry,
    pub score: u32,
}

/// The search engine that ranks commands against a query.
///
/// Holds only its options, so one engine can serve any number of searches
/// from any thread.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    options: SearchOptions,
}

impl SearchEngine {
    /// Create a search engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search engine with the given options.
    pub fn with_options(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search `candidates`, returning matches best first.
    pub fn search<'a>(&self, query: &str, candidates: &'a [CommandEntry]) -> Vec<&'a CommandEntry> {
        self.search_scored(query, candidates)
            .into_iter()
            .map(|scored| scored.entry)
            .collect()
    }

    /// Like [`search`](Self::search) but keeps the scores.
    pub fn search_scored<'a>(
        &self,
        query: &str,
        candidates: &'a [CommandEntry],
    ) -> Vec<ScoredEntry<'a>> {
        let term = query.trim().to_lowercase();

        let ranked = if term.is_empty() {
            match self.options.empty_query {
                EmptyQuery::Hide => Vec::new(),
                EmptyQuery::BrowseAll => candidates
                    .iter()
                    .map(|entry| ScoredEntry { entry, score: 0 })
                    .collect(),
            }
        } else {
            let mut scored: Vec<ScoredEntry<'a>> = candidates
                .iter()
                .filter_map(|entry| {
                    let score = score_lowercased_command(
                        &term,
                        entry,
                        self.options.description_threshold,
                    );
                    (score > 0).then_some(ScoredEntry { entry, score })
                })
                .collect();

            // Stable: equal scores keep dataset order
            scored.sort_by(|a, b| b.score.cmp(&a.score));
            scored
        };

        let mut results = dedup_by_name(ranked);
        if let Some(max) = self.options.max_results {
            results.truncate(max);
        }

        debug!(query = %term, found = results.len(), "search");
        results
    }
}

/// Search with default options.
pub fn search<'a>(query: &str, candidates: &'a [CommandEntry]) -> Vec<&'a CommandEntry> {
    SearchEngine::new().search(query, candidates)
}

/// Score how well `term` matches `text`. Zero means no match.
pub fn fuzzy_score(term: &str, text: &str) -> u32 {
    fuzzy_score_lowercased(&term.to_lowercase(), &text.to_lowercase())
}

/// Combined score of a command for `term`. Zero means no match.
pub fn score_command(term: &str, entry: &CommandEntry, description_threshold: u32) -> u32 {
    score_lowercased_command(&term.to_lowercase(), entry, description_threshold)
}

fn score_lowercased_command(term: &str, entry: &CommandEntry, description_threshold: u32) -> u32 {
    let name = entry.name.to_lowercase();

    if term.chars().count() <= SHORT_QUERY_MAX_LEN {
        return if name.contains(term) {
            fuzzy_score_lowercased(term, &name) + SHORT_NAME_MATCH_BONUS
        } else {
            0
        };
    }

    let name_score = fuzzy_score_lowercased(term, &name);
    if name_score > 0 {
        return name_score.saturating_add(NAME_MATCH_BONUS);
    }

    let description_score = fuzzy_score_lowercased(term, &entry.description.to_lowercase());
    if description_score > description_threshold {
        description_score
    } else {
        0
    }
}

/// Both arguments must already be lowercase.
fn fuzzy_score_lowercased(term: &str, text: &str) -> u32 {
    let term_len = term.chars().count();
    let text_len = text.chars().count();

    if text.contains(term) {
        let score = EXACT_MATCH_BASE - (text_len as i64 - term_len as i64);
        return score.max(0) as u32;
    }

    let mut pending = term.chars().peekable();
    let mut matched = 0usize;
    let mut consecutive = 0u64;
    let mut score = 0u64;

    for c in text.chars() {
        let Some(&want) = pending.peek() else {
            break;
        };
        if c == want {
            pending.next();
            matched += 1;
            consecutive += 1;
            score += consecutive * 2;
        } else {
            consecutive = 0;
        }
    }

    if matched < term_len {
        return 0;
    }

    // matched == term_len > 0 here, so text_len >= term_len > 0
    let weighted = score * term_len as u64 * 10 / text_len as u64;
    u32::try_from(weighted).unwrap_or(u32::MAX)
}

fn dedup_by_name(ranked: Vec<ScoredEntry<'_>>) -> Vec<ScoredEntry<'_>> {
    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .filter(|scored| seen.insert(scored.entry.name.as_str()))
        .collect()
}
