//! Theme registry
//!
//! The registry owns the toolkit and every compiled theme. Themes are
//! compiled once, when registered. Activating a theme only switches the
//! toolkit and restyles legacy widgets, and activating the current theme
//! again does nothing at all.
//!
//! # Example
//!
//! ```ignore
//! use bootstyle_theme::{HeadlessToolkit, ThemePreset, ThemeRegistry};
//!
//! let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
//! registry.register(ThemePreset::Flatly.definition())?;
//! registry.activate("flatly")?;
//! assert_eq!(registry.current_palette().primary, "#2c3e50");
//! ```

use std::collections::BTreeSet;

use bootstyle_core::{Palette, ThemeDefinition};
use indexmap::IndexMap;

use crate::compiler::StyleCompiler;
use crate::config::CompilerConfig;
use crate::error::{Result, ThemeError};
use crate::legacy;
use crate::platform::Capabilities;
use crate::style::CompiledTheme;
use crate::toolkit::Toolkit;

/// A registered theme and the compiled form that keeps its images alive
#[derive(Debug)]
struct RegisteredTheme {
    definition: ThemeDefinition,
    compiled: CompiledTheme,
}

/// Registered themes plus the toolkit they are installed in
pub struct ThemeRegistry<T: Toolkit> {
    toolkit: T,
    compiler: StyleCompiler,
    themes: IndexMap<String, RegisteredTheme>,
    active: Option<String>,
    fallback: Palette,
}

impl<T: Toolkit> ThemeRegistry<T> {
    /// Registry with the default configuration and probed capabilities
    pub fn new(toolkit: T) -> Self {
        Self::with_config(toolkit, CompilerConfig::default())
    }

    /// Registry with `config`. Capabilities come from the configuration when
    /// it carries them, and from probing `toolkit` otherwise.
    pub fn with_config(toolkit: T, config: CompilerConfig) -> Self {
        let capabilities = config
            .capabilities
            .unwrap_or_else(|| Capabilities::probe(&toolkit));
        Self {
            toolkit,
            compiler: StyleCompiler::new(config, capabilities),
            themes: IndexMap::new(),
            active: None,
            fallback: Palette::default(),
        }
    }

    /// Compile `definition` and install it in the toolkit.
    ///
    /// Returns `Ok(false)` without compiling when the name is already
    /// registered or is a skin the toolkit provides natively.
    pub fn register(&mut self, definition: ThemeDefinition) -> Result<bool> {
        let name = definition.name().to_string();
        if self.themes.contains_key(&name) {
            tracing::debug!(%name, "theme already registered, skipping");
            return Ok(false);
        }
        if self.toolkit.theme_names().iter().any(|native| *native == name) {
            tracing::debug!(%name, "name belongs to a native theme, skipping");
            return Ok(false);
        }

        let compiled = match self.compiler.compile(&definition) {
            Ok(compiled) => compiled,
            Err(err) => {
                tracing::warn!(%name, error = %err, "failed to compile theme");
                return Err(err);
            }
        };
        self.toolkit.theme_create(&name, compiled.parent(), &compiled);
        tracing::info!(
            %name,
            kind = definition.kind().name(),
            rules = compiled.table().len(),
            "registered theme"
        );
        self.themes.insert(
            name,
            RegisteredTheme {
                definition,
                compiled,
            },
        );
        Ok(true)
    }

    /// Register every definition. A failing definition does not stop the
    /// others; failures are returned by theme name.
    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = ThemeDefinition>,
    ) -> Vec<(String, ThemeError)> {
        definitions
            .into_iter()
            .filter_map(|definition| {
                let name = definition.name().to_string();
                self.register(definition).err().map(|err| (name, err))
            })
            .collect()
    }

    /// Make `name` the active theme.
    ///
    /// Unknown names fail with [`ThemeError::UnknownTheme`] and leave the
    /// current theme untouched.
    pub fn activate(&mut self, name: &str) -> Result<()> {
        let Some(theme) = self.themes.get(name) else {
            return Err(ThemeError::UnknownTheme {
                name: name.to_string(),
                known: self
                    .known_theme_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        };
        if self.active.as_deref() == Some(name) {
            tracing::debug!(name, "theme already active");
            return Ok(());
        }

        // Computed before switching so a failure leaves the old theme active
        let entries = legacy::legacy_options(&theme.definition)?;
        self.toolkit.theme_use(name);
        legacy::apply_legacy_options(&theme.definition, &entries, &mut self.toolkit);

        tracing::debug!(
            from = self.active.as_deref().unwrap_or("<none>"),
            to = name,
            "switched theme"
        );
        self.active = Some(name.to_string());
        Ok(())
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Definition of the active theme
    pub fn current_definition(&self) -> Option<&ThemeDefinition> {
        let name = self.active.as_deref()?;
        self.definition(name)
    }

    /// Palette of the active theme, or the default palette before any
    /// theme has been activated
    pub fn current_palette(&self) -> &Palette {
        self.current_definition()
            .map_or(&self.fallback, ThemeDefinition::colors)
    }

    /// Names of every registered theme
    pub fn known_theme_names(&self) -> BTreeSet<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    pub fn compiled(&self, name: &str) -> Option<&CompiledTheme> {
        self.themes.get(name).map(|theme| &theme.compiled)
    }

    pub fn definition(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.get(name).map(|theme| &theme.definition)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.compiler.capabilities()
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessToolkit;
    use crate::presets::ThemePreset;

    #[test]
    fn test_native_names_are_not_registered() {
        let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
        let clam = ThemeDefinition::new("clam", bootstyle_core::ThemeKind::Light);
        assert!(!registry.register(clam).unwrap());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_palette_before_activation() {
        let registry = ThemeRegistry::new(HeadlessToolkit::new());
        assert_eq!(registry.current_palette(), &Palette::default());
        assert!(registry.active_name().is_none());
    }

    #[test]
    fn test_activate_records_legacy_options() {
        let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
        registry.register(ThemePreset::Cosmo.definition()).unwrap();
        registry.activate("cosmo").unwrap();
        assert_eq!(registry.toolkit().active_theme(), Some("cosmo"));
        assert_eq!(registry.toolkit().root_background(), Some("#ffffff"));
        assert_eq!(registry.current_palette().primary, "#2780e3");
    }
}
