use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::document::PREREQUISITE_IRI;

/// Config file looked up in the current directory when `LEARNGRAPH_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "learngraph.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Spacing and origin of the layered layout. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal distance between two consecutive levels.
    #[serde(default = "default_x_spacing")]
    pub x_spacing: f64,
    /// Vertical distance between two nodes of the same level.
    #[serde(default = "default_y_spacing")]
    pub y_spacing: f64,
    #[serde(default = "default_start_x")]
    pub start_x: f64,
    /// Vertical center every level is balanced around.
    #[serde(default = "default_start_y")]
    pub start_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_spacing: default_x_spacing(),
            y_spacing: default_y_spacing(),
            start_x: default_start_x(),
            start_y: default_start_y(),
        }
    }
}

fn default_x_spacing() -> f64 {
    250.0
}

fn default_y_spacing() -> f64 {
    120.0
}

fn default_start_x() -> f64 {
    50.0
}

fn default_start_y() -> f64 {
    50.0
}

/// Property spellings recognized while reading a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Prerequisite predicates in priority order; the first one present on an item wins.
    #[serde(default = "default_prerequisite_predicates")]
    pub prerequisite_predicates: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            prerequisite_predicates: default_prerequisite_predicates(),
        }
    }
}

fn default_prerequisite_predicates() -> Vec<String> {
    vec![
        PREREQUISITE_IRI.to_string(),
        "hasPrerequisite".to_string(),
        "has_prerequisite".to_string(),
    ]
}

/// Logging configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `env_logger` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in LEARNGRAPH_CONFIG environment variable
    /// 2. ./learngraph.toml in current directory
    ///
    /// Falls back to built-in defaults when neither exists. A path named by
    /// LEARNGRAPH_CONFIG must be readable.
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        if let Ok(path) = std::env::var("LEARNGRAPH_CONFIG") {
            return Self::from_file(PathBuf::from(path));
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }

        Ok(Self::default())
    }

    /// Load and validate configuration from an explicit path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        for (name, value) in [
            ("x_spacing", layout.x_spacing),
            ("y_spacing", layout.y_spacing),
            ("start_x", layout.start_x),
            ("start_y", layout.start_y),
        ] {
            if !value.is_finite() {
                anyhow::bail!("layout.{} must be a finite number", name);
            }
        }

        if layout.x_spacing < 0.0 || layout.y_spacing < 0.0 {
            anyhow::bail!("layout.x_spacing and layout.y_spacing must not be negative");
        }

        if self.vocabulary.prerequisite_predicates.is_empty() {
            anyhow::bail!("vocabulary.prerequisite_predicates must list at least one predicate");
        }

        if self
            .vocabulary
            .prerequisite_predicates
            .iter()
            .any(|p| p.trim().is_empty())
        {
            anyhow::bail!("vocabulary.prerequisite_predicates must not contain empty entries");
        }

        Ok(())
    }
}
