//! Theme palettes
//!
//! A palette holds thirteen hex colors: six semantic accents ([`Variant`])
//! and seven structural colors used for backgrounds, text, borders and input
//! fields. Missing entries fall back to white (backgrounds, accents) or black
//! (foreground-like entries), never to an empty value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ColorError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Semantic variants
// ─────────────────────────────────────────────────────────────────────────────

/// Semantic accent role that can replace the default accent of any widget
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
}

impl Variant {
    /// All variants in their stable expansion order
    pub const ALL: [Variant; 6] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Success,
        Variant::Info,
        Variant::Warning,
        Variant::Danger,
    ];

    /// Name used as the style-key prefix (`danger.TButton`)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Palette entry holding this variant's color
    pub const fn key(self) -> ColorKey {
        match self {
            Self::Primary => ColorKey::Primary,
            Self::Secondary => ColorKey::Secondary,
            Self::Success => ColorKey::Success,
            Self::Info => ColorKey::Info,
            Self::Warning => ColorKey::Warning,
            Self::Danger => ColorKey::Danger,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ColorError::UnknownKey(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette keys
// ─────────────────────────────────────────────────────────────────────────────

/// Palette entry keys, as they appear in theme definition records
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorKey {
    // Semantic accents
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,

    // Structural colors
    Bg,
    Fg,
    SelectBg,
    SelectFg,
    Light,
    Border,
    InputFg,
}

impl ColorKey {
    pub const ALL: [ColorKey; 13] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Success,
        ColorKey::Info,
        ColorKey::Warning,
        ColorKey::Danger,
        ColorKey::Bg,
        ColorKey::Fg,
        ColorKey::SelectBg,
        ColorKey::SelectFg,
        ColorKey::Light,
        ColorKey::Border,
        ColorKey::InputFg,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Bg => "bg",
            Self::Fg => "fg",
            Self::SelectBg => "selectbg",
            Self::SelectFg => "selectfg",
            Self::Light => "light",
            Self::Border => "border",
            Self::InputFg => "inputfg",
        }
    }

    /// Value used when a definition omits this key
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Fg | Self::SelectBg | Self::Border | Self::InputFg => "#000000",
            _ => "#ffffff",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorKey {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ColorError::UnknownKey(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// The thirteen colors of a theme
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    // Semantic accents
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub info: String,
    pub warning: String,
    pub danger: String,

    /// Window background
    pub bg: String,
    /// Text on the window background
    pub fg: String,
    /// Selected text background
    pub selectbg: String,
    /// Selected text foreground
    pub selectfg: String,
    /// Input field background and trough color
    pub light: String,
    /// Border of input widgets
    pub border: String,
    /// Text inside input widgets
    pub inputfg: String,
}

impl Palette {
    /// Look up a color by key
    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Secondary => &self.secondary,
            ColorKey::Success => &self.success,
            ColorKey::Info => &self.info,
            ColorKey::Warning => &self.warning,
            ColorKey::Danger => &self.danger,
            ColorKey::Bg => &self.bg,
            ColorKey::Fg => &self.fg,
            ColorKey::SelectBg => &self.selectbg,
            ColorKey::SelectFg => &self.selectfg,
            ColorKey::Light => &self.light,
            ColorKey::Border => &self.border,
            ColorKey::InputFg => &self.inputfg,
        }
    }

    /// Look up a color by its record key (`"primary"`, `"inputfg"`, ...)
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        name.parse::<ColorKey>().ok().map(|key| self.get(key))
    }

    /// Replace a color
    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let slot = match key {
            ColorKey::Primary => &mut self.primary,
            ColorKey::Secondary => &mut self.secondary,
            ColorKey::Success => &mut self.success,
            ColorKey::Info => &mut self.info,
            ColorKey::Warning => &mut self.warning,
            ColorKey::Danger => &mut self.danger,
            ColorKey::Bg => &mut self.bg,
            ColorKey::Fg => &mut self.fg,
            ColorKey::SelectBg => &mut self.selectbg,
            ColorKey::SelectFg => &mut self.selectfg,
            ColorKey::Light => &mut self.light,
            ColorKey::Border => &mut self.border,
            ColorKey::InputFg => &mut self.inputfg,
        };
        *slot = value.into();
    }

    /// Replace a color by its record key
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let key = name.parse::<ColorKey>()?;
        self.set(key, value);
        Ok(())
    }

    /// Builder-style [`Palette::set`]
    pub fn with(mut self, key: ColorKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Color of a semantic variant
    pub fn variant(&self, variant: Variant) -> &str {
        self.get(variant.key())
    }

    /// Variants paired with their colors, in [`Variant::ALL`] order
    pub fn variants(&self) -> impl Iterator<Item = (Variant, &str)> + '_ {
        Variant::ALL.into_iter().map(|v| (v, self.variant(v)))
    }

    /// Check every entry, reporting the first malformed one
    pub fn validate(&self) -> Result<()> {
        for key in ColorKey::ALL {
            Rgb::from_hex(self.get(key))?;
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: ColorKey::Primary.default_value().into(),
            secondary: ColorKey::Secondary.default_value().into(),
            success: ColorKey::Success.default_value().into(),
            info: ColorKey::Info.default_value().into(),
            warning: ColorKey::Warning.default_value().into(),
            danger: ColorKey::Danger.default_value().into(),
            bg: ColorKey::Bg.default_value().into(),
            fg: ColorKey::Fg.default_value().into(),
            selectbg: ColorKey::SelectBg.default_value().into(),
            selectfg: ColorKey::SelectFg.default_value().into(),
            light: ColorKey::Light.default_value().into(),
            border: ColorKey::Border.default_value().into(),
            inputfg: ColorKey::InputFg.default_value().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variant_order_is_stable() {
        let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            vec!["primary", "secondary", "success", "info", "warning", "danger"]
        );
    }

    #[test]
    fn test_variant_round_trips_through_name() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>(), Ok(v));
        }
        assert!("accent".parse::<Variant>().is_err());
    }

    #[test]
    fn test_defaults_are_never_empty() {
        let palette = Palette::default();
        assert_eq!(palette.bg, "#ffffff");
        assert_eq!(palette.fg, "#000000");
        assert_eq!(palette.selectfg, "#ffffff");
        assert_eq!(palette.inputfg, "#000000");
        assert!(palette.validate().is_ok());
    }

    #[test]
    fn test_get_and_set_by_name() {
        let mut palette = Palette::default();
        palette.set_by_name("primary", "#fafafa").unwrap();
        assert_eq!(palette.get_by_name("primary"), Some("#fafafa"));
        assert_eq!(palette.variant(Variant::Primary), "#fafafa");
        assert_eq!(palette.get_by_name("accent"), None);
        assert_eq!(
            palette.set_by_name("accent", "#000"),
            Err(ColorError::UnknownKey("accent".into()))
        );
    }

    #[test]
    fn test_validate_reports_first_bad_entry() {
        let palette = Palette::default()
            .with(ColorKey::Border, "grey")
            .with(ColorKey::Info, "#12");
        assert_eq!(
            palette.validate(),
            Err(ColorError::InvalidFormat("#12".into()))
        );
    }

    #[test]
    fn test_deserialize_fills_missing_keys() {
        let palette: Palette =
            serde_json::from_str(r##"{"primary": "#2780e3", "bg": "#222"}"##).unwrap();
        assert_eq!(palette.primary, "#2780e3");
        assert_eq!(palette.bg, "#222");
        assert_eq!(palette.danger, "#ffffff");
        assert_eq!(palette.border, "#000000");
    }
}
