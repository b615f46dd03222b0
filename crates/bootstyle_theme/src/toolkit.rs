//! The seam between compiled themes and a widget toolkit
//!
//! The compiler never talks to a toolkit. The registry does, through this
//! trait, so any toolkit binding (or the in-memory [`HeadlessToolkit`]) can
//! host bootstyle themes.
//!
//! [`HeadlessToolkit`]: crate::headless::HeadlessToolkit

use crate::style::{BaseTheme, CompiledTheme, Value};

/// A themed widget toolkit
pub trait Toolkit {
    /// Every theme the toolkit currently knows, native or created
    fn theme_names(&self) -> Vec<String>;

    /// Install `theme` under `name`, inheriting from `parent`.
    ///
    /// Implementations keep images through [`AssetStore::handle`] weak
    /// handles; the strong references stay with the compiled theme.
    ///
    /// [`AssetStore::handle`]: crate::style::AssetStore::handle
    fn theme_create(&mut self, name: &str, parent: BaseTheme, theme: &CompiledTheme);

    /// Make an installed theme current
    fn theme_use(&mut self, name: &str);

    /// Write an option-database entry for legacy widgets. A later write to
    /// the same pattern replaces the earlier one.
    fn option_add(&mut self, pattern: &str, value: &Value, priority: Option<u8>);

    /// Set the background of the root window
    fn configure_root_background(&mut self, color: &str);
}
