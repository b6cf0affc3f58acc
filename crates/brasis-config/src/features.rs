//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the boolean switches of the converter.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Insert line breaks between consecutive source lines.
    /// Default: true
    #[serde(default = "default_true")]
    pub preserve_line_breaks: bool,

    /// Enable debug logging.
    /// Default: false
    #[serde(default)]
    pub logging: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            preserve_line_breaks: true,
            logging: false,
        }
    }
}

/// Feature flags given in an override; absent keys stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesOverride {
    pub preserve_line_breaks: Option<bool>,
    pub logging: Option<bool>,
}

impl FeaturesConfig {
    /// Apply the keys set in an override.
    pub fn merge(&mut self, other: &FeaturesOverride) {
        if let Some(preserve) = other.preserve_line_breaks {
            self.preserve_line_breaks = preserve;
        }
        if let Some(logging) = other.logging {
            self.logging = logging;
        }
    }
}

fn default_true() -> bool {
    true
}
