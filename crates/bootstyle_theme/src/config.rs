//! Compiler configuration
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! parent = "clam"
//! slider_diameter = 18
//! trough_size = 8
//!
//! [capabilities]
//! custom_indicator_colors = false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::Capabilities;
use crate::style::BaseTheme;

/// Settings shared by every theme a compiler produces
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Base skin every compiled theme inherits from
    pub parent: BaseTheme,
    /// Slider thumb diameter in pixels
    pub slider_diameter: u32,
    /// Side of the square slider trough swatch in pixels
    pub trough_size: u32,
    /// Skip probing the toolkit and use these capabilities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            parent: BaseTheme::Clam,
            slider_diameter: 18,
            trough_size: 8,
            capabilities: None,
        }
    }
}

impl CompilerConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(CompilerConfig::from_toml_str("").unwrap(), CompilerConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = CompilerConfig::from_toml_str(
            r#"
            slider_diameter = 24

            [capabilities]
            custom_indicator_colors = false
            "#,
        )
        .unwrap();
        assert_eq!(config.slider_diameter, 24);
        assert_eq!(config.trough_size, 8);
        assert_eq!(config.parent, BaseTheme::Clam);
        assert_eq!(
            config.capabilities,
            Some(Capabilities {
                custom_indicator_colors: false,
                native_slider_thumb: false,
            })
        );
    }

    #[test]
    fn test_bad_document() {
        let err = CompilerConfig::from_toml_str("parent = \"motif\"").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }
}
