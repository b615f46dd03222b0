//! Style rules

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::assets::AssetKey;
use super::layout::LayoutNode;
use super::state::{State, StateSpec};
use super::value::Value;

/// Option name to value
pub type PropertyMap = IndexMap<String, Value>;

/// Option name to an ordered list of `(predicate, value)` pairs.
///
/// The first pair whose predicate matches the widget's states wins, so more
/// specific predicates must come first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateMap {
    options: IndexMap<String, Vec<(StateSpec, Value)>>,
}

impl StateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pairs for `option`, replacing any previous list
    pub fn insert(&mut self, option: &str, entries: impl IntoIterator<Item = (StateSpec, Value)>) {
        self.options
            .insert(option.to_string(), entries.into_iter().collect());
    }

    pub fn get(&self, option: &str) -> Option<&[(StateSpec, Value)]> {
        self.options.get(option).map(Vec::as_slice)
    }

    /// First-match-wins lookup for a widget in the `active` states
    pub fn resolve(&self, option: &str, active: &[State]) -> Option<&Value> {
        self.get(option)?
            .iter()
            .find(|(spec, _)| spec.matches(active))
            .map(|(_, value)| value)
    }

    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Base skin a theme inherits from or borrows elements of
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTheme {
    #[default]
    Clam,
    Alt,
    Default,
    Classic,
    Xpnative,
}

impl BaseTheme {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clam => "clam",
            Self::Alt => "alt",
            Self::Default => "default",
            Self::Classic => "classic",
            Self::Xpnative => "xpnative",
        }
    }
}

/// How an element is created
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementSpec {
    /// Copy the element of the same name from a base skin
    From(BaseTheme),
    /// Image element with per-state overrides
    Image {
        default: AssetKey,
        states: Vec<(StateSpec, AssetKey)>,
    },
}

/// Everything a theme says about one style key
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<LayoutNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configure: Option<PropertyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<StateMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementSpec>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule that only creates an element copied from `base`
    pub fn borrowed(base: BaseTheme) -> Self {
        Self {
            element: Some(ElementSpec::From(base)),
            ..Self::default()
        }
    }

    /// Rule that only creates an image element
    pub fn image(default: AssetKey, states: Vec<(StateSpec, AssetKey)>) -> Self {
        Self {
            element: Some(ElementSpec::Image { default, states }),
            ..Self::default()
        }
    }

    pub fn set(mut self, option: &str, value: impl Into<Value>) -> Self {
        self.configure
            .get_or_insert_with(PropertyMap::default)
            .insert(option.to_string(), value.into());
        self
    }

    pub fn map(mut self, option: &str, entries: impl IntoIterator<Item = (StateSpec, Value)>) -> Self {
        self.map
            .get_or_insert_with(StateMap::default)
            .insert(option, entries);
        self
    }

    pub fn layout(mut self, nodes: impl IntoIterator<Item = LayoutNode>) -> Self {
        self.layout = Some(nodes.into_iter().collect());
        self
    }

    /// Configured value of `option`
    pub fn get(&self, option: &str) -> Option<&Value> {
        self.configure.as_ref()?.get(option)
    }

    /// State pairs for `option`
    pub fn states(&self, option: &str) -> Option<&[(StateSpec, Value)]> {
        self.map.as_ref()?.get(option)
    }

    /// Value of `option` for a widget in the `active` states, falling back
    /// to the configured value when no pair matches
    pub fn resolve(&self, option: &str, active: &[State]) -> Option<&Value> {
        self.map
            .as_ref()
            .and_then(|map| map.resolve(option, active))
            .or_else(|| self.get(option))
    }

    /// Does this rule set `option` in either its configuration or its map?
    pub fn mentions(&self, option: &str) -> bool {
        self.get(option).is_some() || self.states(option).is_some()
    }
}
