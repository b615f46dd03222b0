//! Style compiler
//!
//! Turns a [`ThemeDefinition`] into a [`CompiledTheme`]. The work is split
//! into independent widget families. Each family sees only the immutable
//! [`CompileContext`] and returns a [`Fragment`] of rules and images, and the
//! fragments are merged by key once every family has run. Adding a family
//! means adding one [`WidgetFamily`] implementation to [`families`].
//!
//! Every family expands each of its widget classes seven times: once for the
//! base rule (`TButton`, drawn with the primary color) and once per semantic
//! variant (`primary.TButton` ... `danger.TButton`).

mod families;

use bootstyle_core::{brightness, Palette, ThemeDefinition, ThemeKind, Variant};
use indexmap::IndexMap;

use crate::config::CompilerConfig;
use crate::error::Result;
use crate::platform::Capabilities;
use crate::style::{AssetKey, AssetStore, CompiledTheme, State, StateSpec, StyleRule, StyleTable, Value};

pub use families::families;

/// Brightness delta for the pressed state
pub const PRESSED: f64 = -0.2;
/// Brightness delta for the hover state
pub const HOVER: f64 = -0.1;

// ─────────────────────────────────────────────────────────────────────────────
// Compile context
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only inputs shared by every family
#[derive(Clone, Copy, Debug)]
pub struct CompileContext<'a> {
    definition: &'a ThemeDefinition,
    capabilities: Capabilities,
    config: &'a CompilerConfig,
}

impl<'a> CompileContext<'a> {
    pub fn new(
        definition: &'a ThemeDefinition,
        capabilities: Capabilities,
        config: &'a CompilerConfig,
    ) -> Self {
        Self {
            definition,
            capabilities,
            config,
        }
    }

    pub fn palette(&self) -> &'a Palette {
        self.definition.colors()
    }

    pub fn kind(&self) -> ThemeKind {
        self.definition.kind()
    }

    pub fn is_dark(&self) -> bool {
        self.definition.is_dark()
    }

    pub fn font(&self) -> &'a str {
        self.definition.font()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn config(&self) -> &'a CompilerConfig {
        self.config
    }

    /// `color` with its HSV value scaled by `1 + delta`
    pub fn shade(&self, color: &str, delta: f64) -> Result<String> {
        Ok(brightness(color, delta)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Accent
// ─────────────────────────────────────────────────────────────────────────────

/// The color one expansion pass draws with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent<'a> {
    variant: Option<Variant>,
    color: &'a str,
}

impl<'a> Accent<'a> {
    /// The base pass, drawn with the primary color
    pub fn base(palette: &'a Palette) -> Self {
        Self {
            variant: None,
            color: &palette.primary,
        }
    }

    pub fn variant(variant: Variant, color: &'a str) -> Self {
        Self {
            variant: Some(variant),
            color,
        }
    }

    /// Every pass in expansion order: base, then each variant
    pub fn all(palette: &'a Palette) -> impl Iterator<Item = Accent<'a>> {
        std::iter::once(Self::base(palette))
            .chain(palette.variants().map(|(v, c)| Self::variant(v, c)))
    }

    pub fn is_base(&self) -> bool {
        self.variant.is_none()
    }

    pub fn variant_id(&self) -> Option<Variant> {
        self.variant
    }

    pub fn color(&self) -> &'a str {
        self.color
    }

    /// Style-key prefix: `""` or `"danger."`
    pub fn prefix(&self) -> String {
        self.variant
            .map_or_else(String::new, |v| format!("{}.", v.name()))
    }

    /// Style key of `class` for this pass
    pub fn key(&self, class: &str) -> String {
        format!("{}{class}", self.prefix())
    }

    /// The accent color, or `neutral` for the base pass of families whose
    /// unaccented look uses a structural color
    pub fn or<'b>(&self, neutral: &'b str) -> &'b str
    where
        'a: 'b,
    {
        match self.variant {
            Some(_) => self.color,
            None => neutral,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragments
// ─────────────────────────────────────────────────────────────────────────────

/// Rules and images produced by one family step
#[derive(Debug, Default)]
pub struct Fragment {
    rules: IndexMap<String, StyleRule>,
    assets: AssetStore,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Fragment::insert`]
    pub fn rule(mut self, key: impl Into<String>, rule: StyleRule) -> Self {
        self.insert(key, rule);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, rule: StyleRule) {
        self.rules.insert(key.into(), rule);
    }

    pub fn insert_asset(&mut self, key: AssetKey, bitmap: bootstyle_image::Bitmap) {
        self.assets.insert(key, bitmap);
    }

    pub fn get(&self, key: &str) -> Option<&StyleRule> {
        self.rules.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append `other`. Keys are owned by exactly one step, so a collision
    /// keeps the first rule.
    pub fn merge(&mut self, other: Fragment) {
        for (key, rule) in other.rules {
            if self.rules.contains_key(&key) {
                debug_assert!(false, "style key {key} produced twice");
                tracing::warn!(key, "duplicate style key, keeping the first rule");
                continue;
            }
            self.rules.insert(key, rule);
        }
        self.assets.absorb(other.assets);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget families
// ─────────────────────────────────────────────────────────────────────────────

/// Stable identifier of a compiler step
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FamilyId {
    Entry,
    SolidButton,
    OutlineButton,
    Checkbutton,
    Radiobutton,
    Combobox,
    Spinbox,
    Scale,
    Scrollbar,
    Notebook,
    Treeview,
    Progressbar,
    Separator,
    Label,
    Labelframe,
    Frame,
    SolidMenubutton,
    OutlineMenubutton,
    Panedwindow,
}

impl FamilyId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::SolidButton => "button-solid",
            Self::OutlineButton => "button-outline",
            Self::Checkbutton => "checkbutton",
            Self::Radiobutton => "radiobutton",
            Self::Combobox => "combobox",
            Self::Spinbox => "spinbox",
            Self::Scale => "scale",
            Self::Scrollbar => "scrollbar",
            Self::Notebook => "notebook",
            Self::Treeview => "treeview",
            Self::Progressbar => "progressbar",
            Self::Separator => "separator",
            Self::Label => "label",
            Self::Labelframe => "labelframe",
            Self::Frame => "frame",
            Self::SolidMenubutton => "menubutton-solid",
            Self::OutlineMenubutton => "menubutton-outline",
            Self::Panedwindow => "paned-window",
        }
    }
}

/// One widget family's contribution to the style table
pub trait WidgetFamily: Sync {
    fn id(&self) -> FamilyId;

    /// Widget classes that receive the base and per-variant rules
    fn classes(&self) -> &'static [&'static str];

    /// Accent-independent elements and auxiliary rules
    fn shared(&self, _ctx: &CompileContext<'_>) -> Result<Fragment> {
        Ok(Fragment::new())
    }

    /// Rules for every class of this family, drawn with `accent`
    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment>;
}

/// Run one family: its shared step, then the base and six variant passes
pub fn expand_family(family: &dyn WidgetFamily, ctx: &CompileContext<'_>) -> Result<Fragment> {
    let mut fragment = family.shared(ctx)?;
    for accent in Accent::all(ctx.palette()) {
        fragment.merge(family.expand(ctx, accent)?);
    }
    tracing::debug!(
        family = family.id().name(),
        rules = fragment.len(),
        images = fragment.assets().len(),
        "expanded widget family"
    );
    Ok(fragment)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compiler
// ─────────────────────────────────────────────────────────────────────────────

/// Compiles definitions with a fixed configuration and capability set
#[derive(Clone, Debug, Default)]
pub struct StyleCompiler {
    config: CompilerConfig,
    capabilities: Capabilities,
}

impl StyleCompiler {
    pub fn new(config: CompilerConfig, capabilities: Capabilities) -> Self {
        Self {
            config,
            capabilities,
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Compile `definition`.
    ///
    /// The palette is validated up front, so a malformed color fails the
    /// whole compilation and nothing is produced.
    pub fn compile(&self, definition: &ThemeDefinition) -> Result<CompiledTheme> {
        definition.colors().validate()?;
        let ctx = CompileContext::new(definition, self.capabilities, &self.config);

        let mut output = families::defaults(&ctx)?;
        for family in families() {
            output.merge(expand_family(*family, &ctx)?);
        }

        let Fragment { rules, assets } = output;
        let table: StyleTable = rules.into_iter().collect();
        tracing::debug!(
            theme = definition.name(),
            rules = table.len(),
            images = assets.len(),
            "compiled theme"
        );
        Ok(CompiledTheme::new(
            definition.name(),
            definition.kind(),
            self.config.parent,
            table,
            assets,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers for family implementations
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn is(state: State) -> StateSpec {
    StateSpec::from(state)
}

pub(crate) fn not(state: State) -> StateSpec {
    StateSpec::not(state)
}

pub(crate) fn color(hex: impl Into<String>) -> Value {
    Value::color(hex)
}

/// `pressed` then `hover` pairs, in first-match order
pub(crate) fn pressed_hover(pressed: &str, hover: &str) -> [(StateSpec, Value); 2] {
    [
        (is(State::Pressed), color(pressed)),
        (is(State::Hover), color(hover)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_keys() {
        let palette = Palette::default();
        let keys: Vec<String> = Accent::all(&palette).map(|a| a.key("TButton")).collect();
        assert_eq!(
            keys,
            [
                "TButton",
                "primary.TButton",
                "secondary.TButton",
                "success.TButton",
                "info.TButton",
                "warning.TButton",
                "danger.TButton",
            ]
        );
    }

    #[test]
    fn test_accent_neutral_fallback() {
        let palette = Palette::default().with(bootstyle_core::ColorKey::Danger, "#ff0039");
        let base = Accent::base(&palette);
        assert!(base.is_base());
        assert_eq!(base.or("#222222"), "#222222");
        let danger = Accent::variant(Variant::Danger, palette.variant(Variant::Danger));
        assert_eq!(danger.or("#222222"), "#ff0039");
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut a = Fragment::new().rule("TLabel", StyleRule::new());
        a.merge(Fragment::new().rule("primary.TLabel", StyleRule::new()));
        assert_eq!(a.keys().collect::<Vec<_>>(), ["TLabel", "primary.TLabel"]);
    }
}
