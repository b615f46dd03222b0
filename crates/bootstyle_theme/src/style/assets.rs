//! Synthesized image assets
//!
//! Toolkits reference images by handle and do not keep them alive on their
//! own, so the [`AssetStore`] of a compiled theme holds the only strong
//! references. Toolkits receive [`Weak`] handles.

use std::fmt;
use std::sync::{Arc, Weak};

use bootstyle_core::Variant;
use bootstyle_image::Bitmap;
use indexmap::IndexMap;
use serde::Serialize;

/// Interaction state a slider glyph is drawn for
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderState {
    Regular,
    Pressed,
    Hover,
}

impl SliderState {
    pub const ALL: [SliderState; 3] = [SliderState::Regular, SliderState::Pressed, SliderState::Hover];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Pressed => "pressed",
            Self::Hover => "hover",
        }
    }
}

/// Role of a synthesized image within its theme
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKey {
    /// Slider thumb; `accent` is `None` for the base rule
    Slider {
        accent: Option<Variant>,
        state: SliderState,
    },
    /// Shared slider trough
    Trough,
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slider { accent, state } => {
                let accent = accent.map_or("base", |v| v.name());
                write!(f, "slider_{accent}_{}", state.name())
            }
            Self::Trough => f.write_str("trough"),
        }
    }
}

/// Strong owner of every image a compiled theme references
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    images: IndexMap<AssetKey, Arc<Bitmap>>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bitmap` under `key`, replacing any previous image
    pub fn insert(&mut self, key: AssetKey, bitmap: Bitmap) {
        self.images.insert(key, Arc::new(bitmap));
    }

    pub fn get(&self, key: &AssetKey) -> Option<&Arc<Bitmap>> {
        self.images.get(key)
    }

    /// Non-owning handle for a toolkit
    pub fn handle(&self, key: &AssetKey) -> Option<Weak<Bitmap>> {
        self.images.get(key).map(Arc::downgrade)
    }

    /// Non-owning handles for every image, in insertion order
    pub fn handles(&self) -> impl Iterator<Item = (AssetKey, Weak<Bitmap>)> + '_ {
        self.images.iter().map(|(k, v)| (*k, Arc::downgrade(v)))
    }

    pub fn contains(&self, key: &AssetKey) -> bool {
        self.images.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &AssetKey> {
        self.images.keys()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Move every image of `other` into this store
    pub fn absorb(&mut self, other: AssetStore) {
        self.images.extend(other.images);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstyle_image::solid_swatch;

    #[test]
    fn test_weak_handles_die_with_store() {
        let mut store = AssetStore::new();
        store.insert(AssetKey::Trough, solid_swatch("#f8f9fa", 8, 8).unwrap());
        let handle = store.handle(&AssetKey::Trough).unwrap();
        assert!(handle.upgrade().is_some());
        drop(store);
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn test_key_names() {
        let key = AssetKey::Slider {
            accent: Some(Variant::Danger),
            state: SliderState::Pressed,
        };
        assert_eq!(key.to_string(), "slider_danger_pressed");
        let key = AssetKey::Slider {
            accent: None,
            state: SliderState::Regular,
        };
        assert_eq!(key.to_string(), "slider_base_regular");
    }
}
