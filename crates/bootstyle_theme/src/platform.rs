//! Toolkit capability detection
//!
//! Some native skins draw check and radio indicators that ignore color
//! options. Which ones do is decided once per process, before any theme is
//! compiled, and handed to the compiler as a [`Capabilities`] value.

use serde::{Deserialize, Serialize};

use crate::style::BaseTheme;
use crate::toolkit::Toolkit;

/// What the host toolkit lets a theme customize
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Check/radio indicators honor color options
    pub custom_indicator_colors: bool,
    /// Slider thumbs are drawn natively and only need colors
    pub native_slider_thumb: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            custom_indicator_colors: true,
            native_slider_thumb: false,
        }
    }
}

impl Capabilities {
    /// Inspect the skins a toolkit provides.
    ///
    /// A toolkit that ships `xpnative` is running on a platform whose native
    /// indicators must be used as-is.
    pub fn probe<T: Toolkit + ?Sized>(toolkit: &T) -> Self {
        let native_indicators = toolkit
            .theme_names()
            .iter()
            .any(|name| name == BaseTheme::Xpnative.name());

        let caps = Self {
            custom_indicator_colors: !native_indicators,
            ..Self::default()
        };
        tracing::debug!(?caps, "probed toolkit capabilities");
        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessToolkit;

    #[test]
    fn test_probe_plain_toolkit() {
        let caps = Capabilities::probe(&HeadlessToolkit::new());
        assert_eq!(caps, Capabilities::default());
    }

    #[test]
    fn test_probe_xpnative_toolkit() {
        let toolkit = HeadlessToolkit::with_native_themes(["winnative", "clam", "xpnative"]);
        let caps = Capabilities::probe(&toolkit);
        assert!(!caps.custom_indicator_colors);
        assert!(!caps.native_slider_thumb);
    }
}
