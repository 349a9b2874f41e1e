//! Renderer configuration

use serde::Deserialize;

use crate::error::ConfigError;

/// Renderer settings. The defaults reproduce plain canvas behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fill used by text and rect parts with no color of their own
    pub default_fill: String,
    /// Marker appended to a single-line text that overflowed; as many
    /// characters as it has are dropped from the line first
    pub ellipsis: String,
    /// Request URL images in cross-origin anonymous mode
    pub anonymous_images: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_fill: "#000".to_string(),
            ellipsis: "..".to_string(),
            anonymous_images: true,
        }
    }
}

impl RenderConfig {
    /// Parse from TOML; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}
