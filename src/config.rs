//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::{ExportFormat, Platform};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Brand voice used when the wizard "generates" content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    /// Warm and approachable but credible
    #[default]
    FriendlyProfessional,
    /// Playful, punchy, internet-native
    CasualBold,
    /// Understated elegance, less is more
    LuxuryMinimal,
    /// Data-driven and expert
    TechnicalAuthority,
}

impl Tone {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FriendlyProfessional => "Friendly professional",
            Self::CasualBold => "Casual bold",
            Self::LuxuryMinimal => "Luxury minimal",
            Self::TechnicalAuthority => "Technical authority",
        }
    }
}

/// Brand brief collected by the setup wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Business name shown in the title bar
    pub business_name: String,
    /// Brand voice
    pub tone: Tone,
    /// Unique selling proposition
    pub usp: String,
    /// Target audience description
    pub target_audience: String,
    /// Words the copy must never use
    pub words_to_avoid: Vec<String>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            tone: Tone::default(),
            usp: String::new(),
            target_audience: String::new(),
            words_to_avoid: vec!["cheap".to_string(), "luxury".to_string()],
        }
    }
}

/// Export output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory export files are written to
    pub export_dir: PathBuf,
    /// Default export format
    pub format: ExportFormat,
    /// Platforms enabled for generation and export
    pub platforms: Vec<Platform>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let export_dir = Config::config_dir()
            .map(|dir| dir.join("exports"))
            .unwrap_or_else(|_| PathBuf::from("exports"));

        Self {
            export_dir,
            format: ExportFormat::default(),
            platforms: Platform::ALL.to_vec(),
        }
    }
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme display mode
    pub theme_mode: ThemeMode,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Brand brief
    pub brand: BrandConfig,
    /// Export output settings
    pub output: OutputConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/AdBoard/`
    /// - macOS: `~/Library/Application Support/AdBoard/`
    /// - Windows: `%APPDATA%\AdBoard\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("AdBoard"))
    }

    /// Gets the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks whether a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads configuration from the config file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves configuration to the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Whether the setup wizard has been completed.
    ///
    /// A configuration counts as complete once a business name has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.brand.business_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_not_configured() {
        let config = Config::new();
        assert!(!config.is_configured());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::new();
        config.brand.business_name = "Hearth & Haven".to_string();
        config.brand.tone = Tone::CasualBold;
        config.output.format = ExportFormat::Json;
        config.output.platforms = vec![Platform::Meta, Platform::Tiktok];

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
        assert!(parsed.is_configured());
    }

    #[test]
    fn test_all_platforms_enabled_by_default() {
        let config = Config::new();
        assert_eq!(config.output.platforms, Platform::ALL.to_vec());
    }
}
