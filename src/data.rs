//! Command dataset loading and validation.
//!
//! The reference ships with a bundled JSON dataset compiled into the binary.
//! A different file can be pointed to from the config or the command line.
//! Both go through the same validation: platform tags must come from the
//! supported set and names must be unique and non-empty.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::{CommandEntry, Platform};
use crate::error::{TldrError, TldrResult};

/// Dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../data/commands.json");

/// A command exactly as it appears in a dataset file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCommand {
    name: String,
    #[serde(default)]
    stands_for: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    platform: Vec<String>,
    #[serde(default)]
    category: Option<String>,
}

impl RawCommand {
    fn into_entry(self) -> TldrResult<CommandEntry> {
        let mut platform = Vec::with_capacity(self.platform.len());
        for tag in &self.platform {
            let parsed = tag
                .parse::<Platform>()
                .map_err(|platform| TldrError::InvalidPlatform {
                    command: self.name.clone(),
                    platform,
                })?;
            if !platform.contains(&parsed) {
                platform.push(parsed);
            }
        }

        Ok(CommandEntry {
            name: self.name,
            stands_for: self.stands_for.filter(|s| !s.is_empty()),
            description: self.description.unwrap_or_default(),
            examples: self.examples,
            platform,
            category: self.category.filter(|s| !s.is_empty()),
        })
    }
}

/// Load the bundled dataset.
pub fn bundled() -> TldrResult<Vec<CommandEntry>> {
    parse(BUNDLED_DATASET)
}

/// Load and validate a dataset from a JSON file.
pub fn load_from_path(path: &Path) -> TldrResult<Vec<CommandEntry>> {
    let content = fs::read_to_string(path)
        .map_err(|e| TldrError::Dataset(format!("failed to read {}: {}", path.display(), e)))?;
    let commands = parse(&content)?;
    info!(path = %path.display(), count = commands.len(), "loaded dataset");
    Ok(commands)
}

/// Load the dataset the config points to, or the bundled one.
pub fn load(config: &Config) -> TldrResult<Vec<CommandEntry>> {
    match config.general.dataset_path() {
        Some(path) => load_from_path(&path),
        None => bundled(),
    }
}

/// Parse and validate a dataset from JSON text.
pub fn parse(json: &str) -> TldrResult<Vec<CommandEntry>> {
    let raw: Vec<RawCommand> = serde_json::from_str(json)?;
    let commands = raw
        .into_iter()
        .map(RawCommand::into_entry)
        .collect::<TldrResult<Vec<_>>>()?;
    validate(&commands)?;
    debug!(count = commands.len(), "parsed dataset");
    Ok(commands)
}

/// Check the invariants the search and UI rely on.
pub fn validate(commands: &[CommandEntry]) -> TldrResult<()> {
    let mut seen = HashSet::with_capacity(commands.len());
    for (index, command) in commands.iter().enumerate() {
        if command.name.trim().is_empty() {
            return Err(TldrError::EmptyName(index));
        }
        if !seen.insert(command.name.as_str()) {
            return Err(TldrError::DuplicateName(command.name.clone()));
        }
    }
    Ok(())
}

/// Find a command by name, ignoring case.
pub fn find<'a>(commands: &'a [CommandEntry], name: &str) -> TldrResult<&'a CommandEntry> {
    commands
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| TldrError::NotFound(name.to_string()))
}

/// Distinct categories in dataset order.
pub fn categories(commands: &[CommandEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    commands
        .iter()
        .filter_map(|c| c.category.as_deref())
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Resolve a user-supplied dataset path, expanding `~`.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}
