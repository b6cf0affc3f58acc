//! Brasis Config
//!
//! This crate handles configuration loading and management
//! for brasis, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/brasis/config.toml`
//! - macOS: `~/Library/Application Support/brasis/config.toml`
//! - Windows: `%APPDATA%\brasis\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use brasis_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod html;

pub use features::{FeaturesConfig, FeaturesOverride};
pub use html::{HtmlConfig, HtmlOverride};

use brasis_core::{BrasisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
PreserveLineBreaks = true
Logging            = false

[html]
Xhtml      = false
Standalone = false
Title      = ""
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// HTML output configuration
    #[serde(default)]
    pub html: HtmlConfig,
}

/// Partial configuration from `-c`; only the keys it names are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub features: FeaturesOverride,

    #[serde(default)]
    pub html: HtmlOverride,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use brasis_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[html]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "brasis")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BrasisError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// If `override_config` names an existing file it is loaded and merged,
    /// otherwise it is parsed as inline TOML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use brasis_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[features]\nPreserveLineBreaks = false")).unwrap();
    /// assert!(!config.features.preserve_line_breaks);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given either as a file path or as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<ConfigOverride> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| BrasisError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Keys set in `other` take precedence; keys it leaves out keep their
    /// current values.
    ///
    /// # Example
    ///
    /// ```
    /// use brasis_config::{Config, ConfigOverride};
    ///
    /// let mut base = Config::default();
    /// let override_config: ConfigOverride = toml::from_str(r#"
    ///     [html]
    ///     Xhtml = true
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(base.html.xhtml);
    /// assert!(base.features.preserve_line_breaks);
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.features.merge(&other.features);
        self.html.merge(&other.html);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| BrasisError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
