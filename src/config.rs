//! Configuration management for cloudtasks
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_SCRIPT_TEMPLATE, SIZE_COLUMN_DEFAULT_WIDTH, SIZE_COLUMN_MAX_WIDTH, SIZE_COLUMN_MIN_WIDTH,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub panel: PanelConfig,
    pub logging: LoggingConfig,
    pub core: CoreConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Enter / double click opens previews, documents and images directly
    pub quick_view: bool,
    /// Width of the size column in columns
    pub size_column_width: u16,
}

/// How the task list filter interprets its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Regex,
    Wildcard,
    FixedString,
}

impl FilterMode {
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::Regex => "regex",
            FilterMode::Wildcard => "wildcard",
            FilterMode::FixedString => "text",
        }
    }
}

/// Task list panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Matching strategy for the filter bar
    pub filter_mode: FilterMode,
    /// Command copied by "Copy as Script"
    /// Placeholders: {gdriveid}, {name}, {link}
    pub script_template: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

/// Task core configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoreConfig {
    /// JSON task list loaded into the in-memory core at startup
    pub seed_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            quick_view: true,
            size_column_width: SIZE_COLUMN_DEFAULT_WIDTH,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::default(),
            script_template: DEFAULT_SCRIPT_TEMPLATE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("cloudtasks.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("cloudtasks").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.size_column_width < SIZE_COLUMN_MIN_WIDTH || self.ui.size_column_width > SIZE_COLUMN_MAX_WIDTH {
            anyhow::bail!(
                "size_column_width must be between {} and {} columns, got {}",
                SIZE_COLUMN_MIN_WIDTH,
                SIZE_COLUMN_MAX_WIDTH,
                self.ui.size_column_width
            );
        }

        if !self.panel.script_template.contains("{link}") {
            anyhow::bail!("script_template must contain the {{link}} placeholder");
        }

        if let Some(seed) = &self.core.seed_file {
            if seed.as_os_str().is_empty() {
                anyhow::bail!("seed_file cannot be empty");
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# cloudtasks Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("cloudtasks"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
