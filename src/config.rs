use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::search::{EmptyQuery, SearchOptions, DEFAULT_DESCRIPTION_THRESHOLD};
use crate::data;
use crate::error::TldrResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub search: SearchConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Dataset file to use instead of the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub description_threshold: u32,
    pub empty_query: EmptyQuery,
    /// 0 means unlimited
    pub max_results: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub window_width: u32,
    pub min_height: u32,
    /// Largest window height as a fraction of the screen height
    pub max_height_ratio: f64,
    /// Examples shown before "+N more"
    pub collapsed_examples: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            description_threshold: DEFAULT_DESCRIPTION_THRESHOLD,
            empty_query: EmptyQuery::Hide,
            max_results: 0,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            min_height: 80,
            max_height_ratio: 0.8,
            collapsed_examples: 2,
        }
    }
}

impl GeneralConfig {
    /// Configured dataset path with `~` expanded.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(data::expand_path)
    }
}

impl SearchConfig {
    pub fn engine_options(&self) -> SearchOptions {
        SearchOptions {
            description_threshold: self.description_threshold,
            empty_query: self.empty_query,
            max_results: (self.max_results > 0).then_some(self.max_results),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                // Fallback: ~ is not expanded by PathBuf, so use dirs::home_dir
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("tldr")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if missing or broken
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file, failing on read or parse errors
    pub fn load_from(path: &Path) -> TldrResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate();
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        self.appearance.window_width = self.appearance.window_width.clamp(400, 1600);
        self.appearance.min_height = self.appearance.min_height.clamp(40, 400);
        self.appearance.max_height_ratio = if self.appearance.max_height_ratio.is_finite() {
            self.appearance.max_height_ratio.clamp(0.2, 1.0)
        } else {
            AppearanceConfig::default().max_height_ratio
        };
        self.appearance.collapsed_examples = self.appearance.collapsed_examples.clamp(1, 10);
    }

    /// Save config to the default path
    pub fn save(&self) -> TldrResult<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> TldrResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }
}
