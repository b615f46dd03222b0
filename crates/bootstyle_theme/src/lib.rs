//! Bootstyle Theme
//!
//! Compiles a small palette of semantic colors into complete widget-toolkit
//! themes, and manages registering and switching between them at runtime.
//!
//! # Overview
//!
//! - **Style compiler**: expands a [`ThemeDefinition`] into a style table
//!   covering every themed widget class, each in a base look and six
//!   semantic variants (`primary.TButton` ... `danger.TButton`)
//! - **Image synthesis**: slider thumbs and troughs are drawn per theme
//!   where the toolkit's own elements cannot be recolored
//! - **Legacy widgets**: classic widgets are styled through the toolkit's
//!   option database
//! - **Registry**: compiles once on registration; switching is cheap and
//!   activating the current theme again is a no-op
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bootstyle_theme::{HeadlessToolkit, ThemePreset, ThemeRegistry};
//!
//! let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
//! let failures = registry.register_all(ThemePreset::all().iter().map(|p| p.definition()));
//! assert!(failures.is_empty());
//!
//! registry.activate("darkly")?;
//! let table = registry.compiled("darkly").unwrap().table();
//! assert!(table.contains_key("danger.TButton"));
//! ```
//!
//! # Toolkits
//!
//! The registry talks to a toolkit only through the [`Toolkit`] trait.
//! [`HeadlessToolkit`] is an in-memory implementation for tests and for
//! hosts without a display.

pub mod compiler;
mod config;
mod error;
pub mod headless;
pub mod legacy;
mod platform;
mod presets;
mod registry;
pub mod style;
mod toolkit;

pub use bootstyle_core::{ColorKey, Palette, ThemeDefinition, ThemeKind, Variant};

pub use compiler::{
    expand_family, families, Accent, CompileContext, FamilyId, Fragment, StyleCompiler,
    WidgetFamily, HOVER, PRESSED,
};
pub use config::CompilerConfig;
pub use error::{Result, ThemeError};
pub use headless::HeadlessToolkit;
pub use legacy::{LegacyOutcome, LegacyWidget, OptionEntry};
pub use platform::Capabilities;
pub use presets::{preset_definitions, ThemePreset};
pub use registry::ThemeRegistry;
pub use style::{
    AssetKey, AssetStore, BaseTheme, CompiledTheme, ElementSpec, LayoutNode, State, StateSpec,
    StyleRule, StyleTable, Value,
};
pub use toolkit::Toolkit;
