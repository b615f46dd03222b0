//! Theme definitions
//!
//! A definition is what a theme catalog produces and what the style compiler
//! consumes: a unique name, a light/dark classification, a font and a
//! [`Palette`]. It is never mutated once handed to a registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::palette::Palette;

/// Light/dark classification of a theme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Pick `light` or `dark` depending on the classification
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ColorError::UnknownKey(other.to_string())),
        }
    }
}

fn default_name() -> String {
    "default".to_string()
}

fn default_font() -> String {
    "helvetica".to_string()
}

/// Named, immutable bundle of palette, font and classification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    #[serde(default = "default_name")]
    name: String,
    #[serde(rename = "type", alias = "classification", default)]
    kind: ThemeKind,
    #[serde(default = "default_font")]
    font: String,
    #[serde(default)]
    colors: Palette,
}

impl ThemeDefinition {
    /// Create a definition with the default font and palette
    pub fn new(name: impl Into<String>, kind: ThemeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            font: default_font(),
            colors: Palette::default(),
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_colors(mut self, colors: Palette) -> Self {
        self.colors = colors;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub fn is_dark(&self) -> bool {
        self.kind.is_dark()
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn colors(&self) -> &Palette {
        &self.colors
    }
}

impl Default for ThemeDefinition {
    fn default() -> Self {
        Self::new(default_name(), ThemeKind::Light)
    }
}

impl fmt::Display for ThemeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}, type={}, font={}",
            self.name, self.kind, self.font
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let def = ThemeDefinition::default();
        assert_eq!(def.name(), "default");
        assert_eq!(def.kind(), ThemeKind::Light);
        assert_eq!(def.font(), "helvetica");
        assert_eq!(def.colors(), &Palette::default());
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let def: ThemeDefinition = serde_json::from_str(
            r##"{
                "name": "darkly",
                "type": "dark",
                "font": "Helvetica",
                "colors": {"primary": "#375a7f", "bg": "#222222"}
            }"##,
        )
        .unwrap();
        assert_eq!(def.name(), "darkly");
        assert!(def.is_dark());
        assert_eq!(def.colors().primary, "#375a7f");
        assert_eq!(def.colors().fg, "#000000");
    }

    #[test]
    fn test_classification_alias() {
        let def: ThemeDefinition =
            serde_json::from_str(r#"{"name": "x", "classification": "dark"}"#).unwrap();
        assert_eq!(def.kind(), ThemeKind::Dark);
        assert_eq!(def.font(), "helvetica");
    }

    #[test]
    fn test_kind_pick() {
        assert_eq!(ThemeKind::Light.pick(1, 2), 1);
        assert_eq!(ThemeKind::Dark.pick(1, 2), 2);
        assert_eq!("dark".parse::<ThemeKind>(), Ok(ThemeKind::Dark));
        assert!("dim".parse::<ThemeKind>().is_err());
    }
}
