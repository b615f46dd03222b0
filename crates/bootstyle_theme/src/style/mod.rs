//! Compiled style tables
//!
//! The style table is the compiler's output: an ordered map from style key
//! (`"danger.TButton"`, `"Scale.track"`, `"."`) to a [`StyleRule`]. A
//! [`CompiledTheme`] bundles the table with the images it references and the
//! base skin it inherits from.

mod assets;
mod layout;
mod rule;
mod state;
mod value;

use std::sync::Arc;

use bootstyle_core::ThemeKind;
use indexmap::IndexMap;
use serde::Serialize;

pub use assets::{AssetKey, AssetStore, SliderState};
pub use layout::{LayoutNode, Side};
pub use rule::{BaseTheme, ElementSpec, PropertyMap, StateMap, StyleRule};
pub use state::{InvalidStateSpec, State, StateSpec, StateTerm};
pub use value::Value;

/// Ordered style key to rule map
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleTable {
    rules: IndexMap<String, StyleRule>,
}

impl StyleTable {
    pub fn get(&self, key: &str) -> Option<&StyleRule> {
        self.rules.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(String, StyleRule)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (String, StyleRule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// A theme ready to hand to a toolkit
#[derive(Debug)]
pub struct CompiledTheme {
    name: String,
    kind: ThemeKind,
    parent: BaseTheme,
    table: Arc<StyleTable>,
    assets: AssetStore,
}

impl CompiledTheme {
    pub fn new(
        name: impl Into<String>,
        kind: ThemeKind,
        parent: BaseTheme,
        table: StyleTable,
        assets: AssetStore,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            parent,
            table: Arc::new(table),
            assets,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    pub fn parent(&self) -> BaseTheme {
        self.parent
    }

    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    /// Shared handle to the table; toolkits keep this instead of a copy
    pub fn shared_table(&self) -> Arc<StyleTable> {
        Arc::clone(&self.table)
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }
}
