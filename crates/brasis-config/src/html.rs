//! HTML output configuration.

use serde::{Deserialize, Serialize};

/// HTML output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HtmlConfig {
    /// Emit self-closing void elements (`<br />`).
    /// Default: false
    #[serde(default)]
    pub xhtml: bool,

    /// Wrap the output in a complete HTML document.
    /// Default: false
    #[serde(default)]
    pub standalone: bool,

    /// Document title used in standalone mode.
    /// Default: empty
    #[serde(default)]
    pub title: String,
}

/// HTML settings given in an override; absent keys stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HtmlOverride {
    pub xhtml: Option<bool>,
    pub standalone: Option<bool>,
    pub title: Option<String>,
}

impl HtmlConfig {
    /// Apply the keys set in an override.
    pub fn merge(&mut self, other: &HtmlOverride) {
        if let Some(xhtml) = other.xhtml {
            self.xhtml = xhtml;
        }
        if let Some(standalone) = other.standalone {
            self.standalone = standalone;
        }
        if let Some(ref title) = other.title {
            self.title = title.clone();
        }
    }
}
