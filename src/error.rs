//! Error types for tldr
//!
//! Provides standardized error handling for everything outside the search
//! core. Searching itself never fails.

use thiserror::Error;

/// Errors that can occur in tldr
#[derive(Debug, Error)]
pub enum TldrError {
    /// Dataset could not be loaded or is malformed
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A command lists a platform outside the supported set
    #[error("Command '{command}' has invalid platform: {platform}")]
    InvalidPlatform { command: String, platform: String },

    /// Two commands share the same name
    #[error("Duplicate command name: {0}")]
    DuplicateName(String),

    /// A command has an empty name
    #[error("Command at index {0} has an empty name")]
    EmptyName(usize),

    /// Lookup by name found nothing
    #[error("No command named '{0}'")]
    NotFound(String),

    /// Window capability errors
    #[error("Window error: {0}")]
    Window(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("Dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias for tldr operations
pub type TldrResult<T> = Result<T, TldrError>;
