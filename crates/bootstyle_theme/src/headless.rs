//! In-memory toolkit
//!
//! [`HeadlessToolkit`] records everything a real toolkit would be told:
//! installed themes, the active theme, the option database and the root
//! background. Useful for:
//! - Tests of the registry and legacy styler
//! - Hosts that want compiled themes without a display
//! - Dumping compiled tables for inspection

use std::sync::{Arc, Weak};

use bootstyle_image::Bitmap;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::style::{AssetKey, BaseTheme, CompiledTheme, StyleTable, Value};
use crate::toolkit::Toolkit;

/// Skins a stock toolkit ships on every platform
pub const DEFAULT_NATIVE_THEMES: [&str; 4] = ["alt", "clam", "classic", "default"];

/// A theme as the toolkit holds it
#[derive(Debug)]
pub struct InstalledTheme {
    parent: BaseTheme,
    table: Arc<StyleTable>,
    images: IndexMap<AssetKey, Weak<Bitmap>>,
}

impl InstalledTheme {
    pub fn parent(&self) -> BaseTheme {
        self.parent
    }

    pub fn table(&self) -> &Arc<StyleTable> {
        &self.table
    }

    /// Upgrade the handle for `key`, if the owning theme is still alive
    pub fn image(&self, key: &AssetKey) -> Option<Arc<Bitmap>> {
        self.images.get(key)?.upgrade()
    }

    /// Number of image handles that still resolve
    pub fn live_images(&self) -> usize {
        self.images
            .values()
            .filter(|handle| handle.strong_count() > 0)
            .count()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// One option-database entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRecord {
    pub value: Value,
    pub priority: Option<u8>,
}

/// A [`Toolkit`] without a display
#[derive(Debug)]
pub struct HeadlessToolkit {
    native: Vec<String>,
    installed: FxHashMap<String, InstalledTheme>,
    active: Option<String>,
    options: IndexMap<String, OptionRecord>,
    root_background: Option<String>,
    theme_switches: usize,
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessToolkit {
    /// A toolkit providing [`DEFAULT_NATIVE_THEMES`]
    pub fn new() -> Self {
        Self::with_native_themes(DEFAULT_NATIVE_THEMES)
    }

    /// A toolkit providing exactly `names` as native skins
    pub fn with_native_themes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            native: names.into_iter().map(Into::into).collect(),
            installed: FxHashMap::default(),
            active: None,
            options: IndexMap::new(),
            root_background: None,
            theme_switches: 0,
        }
    }

    pub fn installed(&self, name: &str) -> Option<&InstalledTheme> {
        self.installed.get(name)
    }

    pub fn active_theme(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Value of an option-database pattern
    pub fn option(&self, pattern: &str) -> Option<&Value> {
        self.options.get(pattern).map(|record| &record.value)
    }

    pub fn options(&self) -> &IndexMap<String, OptionRecord> {
        &self.options
    }

    pub fn root_background(&self) -> Option<&str> {
        self.root_background.as_deref()
    }

    /// How many times [`Toolkit::theme_use`] was called
    pub fn theme_switches(&self) -> usize {
        self.theme_switches
    }
}

impl Toolkit for HeadlessToolkit {
    fn theme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .native
            .iter()
            .cloned()
            .chain(self.installed.keys().cloned())
            .collect();
        names.sort();
        names
    }

    fn theme_create(&mut self, name: &str, parent: BaseTheme, theme: &CompiledTheme) {
        let images = theme.assets().handles().collect();
        self.installed.insert(
            name.to_string(),
            InstalledTheme {
                parent,
                table: theme.shared_table(),
                images,
            },
        );
        tracing::trace!(name, parent = parent.name(), "installed theme");
    }

    fn theme_use(&mut self, name: &str) {
        self.theme_switches += 1;
        self.active = Some(name.to_string());
    }

    fn option_add(&mut self, pattern: &str, value: &Value, priority: Option<u8>) {
        self.options.insert(
            pattern.to_string(),
            OptionRecord {
                value: value.clone(),
                priority,
            },
        );
    }

    fn configure_root_background(&mut self, color: &str) {
        self.root_background = Some(color.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_names() {
        let toolkit = HeadlessToolkit::new();
        assert_eq!(toolkit.theme_names(), ["alt", "clam", "classic", "default"]);
        assert!(toolkit.active_theme().is_none());
    }

    #[test]
    fn test_option_overwrite() {
        let mut toolkit = HeadlessToolkit::new();
        toolkit.option_add("*background", &Value::color("#ffffff"), Some(20));
        toolkit.option_add("*background", &Value::color("#222222"), Some(20));
        assert_eq!(toolkit.options().len(), 1);
        assert_eq!(toolkit.option("*background"), Some(&Value::color("#222222")));
    }
}
