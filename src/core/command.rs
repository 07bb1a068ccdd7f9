//! Command entries shown in the reference list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platforms a command is available on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Mac,
    Windows,
}

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Mac, Platform::Windows];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Mac => "mac",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Platform::Linux),
            "mac" => Ok(Platform::Mac),
            "windows" => Ok(Platform::Windows),
            other => Err(other.to_string()),
        }
    }
}

/// A single command in the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    /// Unique command token (e.g. `grep`)
    pub name: String,
    /// What the name abbreviates, if anything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stands_for: Option<String>,
    /// Searchable description; empty when the dataset omits it
    pub description: String,
    /// Usage lines, each optionally followed by ` # comment`
    pub examples: Vec<String>,
    /// Platforms the command is available on
    pub platform: Vec<Platform>,
    /// Free-form grouping tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CommandEntry {
    /// Create an entry with just a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stands_for: None,
            description: description.into(),
            examples: Vec::new(),
            platform: Vec::new(),
            category: None,
        }
    }

    pub fn with_stands_for(mut self, stands_for: impl Into<String>) -> Self {
        self.stands_for = Some(stands_for.into());
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_platforms(mut self, platforms: &[Platform]) -> Self {
        self.platform = platforms.to_vec();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check if the command is available on the given platform.
    pub fn supports(&self, platform: Platform) -> bool {
        self.platform.contains(&platform)
    }

    /// Parsed examples, in dataset order.
    pub fn parsed_examples(&self) -> impl Iterator<Item = Example<'_>> {
        self.examples.iter().map(|e| Example::parse(e))
    }
}

/// An example line split into the command and its trailing comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example<'a> {
    pub command: &'a str,
    pub comment: Option<&'a str>,
}

impl<'a> Example<'a> {
    /// Split on the first `" # "`. Text after it is the comment.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(" # ") {
            Some((command, comment)) => {
                let comment = comment.trim();
                Self {
                    command: command.trim_end(),
                    comment: (!comment.is_empty()).then_some(comment),
                }
            }
            None => Self {
                command: raw.trim_end(),
                comment: None,
            },
        }
    }
}
