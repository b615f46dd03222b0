//! Legacy widget styling
//!
//! Classic (unthemed) widgets ignore style tables and read their look from
//! the toolkit's option database instead. Each [`LegacyWidget`] maps the
//! active palette to option-database entries. A few widgets only accept
//! colors at construction time and report [`LegacyOutcome::Unsupported`].

use bootstyle_core::{brightness, ThemeDefinition};

use crate::error::Result;
use crate::style::Value;
use crate::toolkit::Toolkit;

/// Priority of the window-wide `*` defaults, above widget class defaults
pub const WINDOW_PRIORITY: u8 = 20;

/// One option-database write
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub pattern: String,
    pub value: Value,
    pub priority: Option<u8>,
}

impl OptionEntry {
    fn new(pattern: &str, value: impl Into<Value>) -> Self {
        Self {
            pattern: pattern.to_string(),
            value: value.into(),
            priority: None,
        }
    }

    fn color(pattern: &str, hex: &str) -> Self {
        Self::new(pattern, Value::color(hex))
    }

    fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Result of styling one legacy widget class
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LegacyOutcome {
    Options(Vec<OptionEntry>),
    /// The widget can only be styled when constructed
    Unsupported,
}

/// Classic widget classes, in the order they are styled
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum LegacyWidget {
    Window,
    Button,
    Label,
    Checkbutton,
    Radiobutton,
    Entry,
    Scale,
    Listbox,
    Spinbox,
    Menu,
    Menubutton,
    Labelframe,
    Scrollbar,
    OptionMenu,
    Text,
    ComboboxPopdown,
}

impl LegacyWidget {
    pub const ALL: [LegacyWidget; 16] = [
        LegacyWidget::Window,
        LegacyWidget::Button,
        LegacyWidget::Label,
        LegacyWidget::Checkbutton,
        LegacyWidget::Radiobutton,
        LegacyWidget::Entry,
        LegacyWidget::Scale,
        LegacyWidget::Listbox,
        LegacyWidget::Spinbox,
        LegacyWidget::Menu,
        LegacyWidget::Menubutton,
        LegacyWidget::Labelframe,
        LegacyWidget::Scrollbar,
        LegacyWidget::OptionMenu,
        LegacyWidget::Text,
        LegacyWidget::ComboboxPopdown,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Button => "button",
            Self::Label => "label",
            Self::Checkbutton => "checkbutton",
            Self::Radiobutton => "radiobutton",
            Self::Entry => "entry",
            Self::Scale => "scale",
            Self::Listbox => "listbox",
            Self::Spinbox => "spinbox",
            Self::Menu => "menu",
            Self::Menubutton => "menubutton",
            Self::Labelframe => "labelframe",
            Self::Scrollbar => "scrollbar",
            Self::OptionMenu => "optionmenu",
            Self::Text => "text",
            Self::ComboboxPopdown => "combobox-popdown",
        }
    }

    /// Option-database entries for this widget under `definition`
    pub fn options(self, definition: &ThemeDefinition) -> Result<LegacyOutcome> {
        let c = definition.colors();
        let dark = definition.is_dark();
        // Input fields sit slightly below the window on dark palettes
        let field = if dark {
            brightness(&c.light, -0.1)?
        } else {
            c.light.clone()
        };

        let entries = match self {
            Self::Window => vec![
                OptionEntry::color("*background", &c.bg).priority(WINDOW_PRIORITY),
                OptionEntry::new("*font", definition.font()),
                OptionEntry::new("*borderWidth", 0).priority(WINDOW_PRIORITY),
                OptionEntry::new("*relief", "flat").priority(WINDOW_PRIORITY),
                OptionEntry::color("*activeBackground", &c.selectbg).priority(WINDOW_PRIORITY),
                OptionEntry::color("*activeForeground", &c.selectfg).priority(WINDOW_PRIORITY),
                OptionEntry::color("*selectBackground", &c.selectbg).priority(WINDOW_PRIORITY),
                OptionEntry::color("*selectForeground", &c.selectfg).priority(WINDOW_PRIORITY),
            ],
            Self::Button => vec![
                OptionEntry::color("*Button.foreground", &c.selectfg),
                OptionEntry::color("*Button.background", &c.primary),
            ],
            Self::Label => vec![
                OptionEntry::color("*Label.foreground", &c.fg),
                OptionEntry::color("*Label.background", &c.bg),
            ],
            Self::Checkbutton | Self::Radiobutton => {
                let class = if self == Self::Checkbutton {
                    "Checkbutton"
                } else {
                    "Radiobutton"
                };
                let mark = if dark { c.primary.as_str() } else { "#ffffff" };
                vec![
                    OptionEntry::color(&format!("*{class}.background"), &c.bg),
                    OptionEntry::color(&format!("*{class}.foreground"), &c.fg),
                    OptionEntry::color(&format!("*{class}.selectColor"), mark),
                ]
            }
            Self::Entry => vec![
                OptionEntry::new("*Entry.relief", "flat"),
                OptionEntry::color("*Entry.background", &field),
                OptionEntry::color("*Entry.foreground", &c.fg),
                OptionEntry::new("*Entry.highlightThickness", 1),
                OptionEntry::color("*Entry.highlightBackground", &c.border),
                OptionEntry::color("*Entry.highlightColor", &c.primary),
            ],
            Self::Scale => vec![
                OptionEntry::color("*Scale.background", &c.primary),
                OptionEntry::new("*Scale.showValue", false),
                OptionEntry::new("*Scale.sliderRelief", "flat"),
                OptionEntry::new("*Scale.highlightThickness", 1),
                OptionEntry::color("*Scale.highlightColor", &c.primary),
                OptionEntry::color("*Scale.highlightBackground", &c.border),
                OptionEntry::color("*Scale.troughColor", &field),
            ],
            Self::Listbox => vec![
                OptionEntry::color("*Listbox.foreground", &c.fg),
                OptionEntry::color("*Listbox.background", &field),
                OptionEntry::new("*Listbox.relief", "flat"),
                OptionEntry::new("*Listbox.activeStyle", "none"),
                OptionEntry::new("*Listbox.highlightThickness", 1),
                OptionEntry::color("*Listbox.highlightColor", &c.primary),
                OptionEntry::color("*Listbox.highlightBackground", &c.border),
            ],
            Self::Spinbox => vec![
                OptionEntry::color("*Spinbox.foreground", &c.fg),
                OptionEntry::color("*Spinbox.background", &field),
                OptionEntry::new("*Spinbox.highlightThickness", 1),
                OptionEntry::color("*Spinbox.highlightColor", &c.primary),
                OptionEntry::color("*Spinbox.highlightBackground", &c.border),
            ],
            Self::Menu => vec![
                OptionEntry::new("*Menu.tearOff", 0),
                OptionEntry::color("*Menu.foreground", &c.fg),
                OptionEntry::color("*Menu.selectColor", &c.primary),
            ],
            Self::Menubutton => vec![
                OptionEntry::color("*Menubutton.background", &c.primary),
                OptionEntry::color("*Menubutton.foreground", &c.selectfg),
            ],
            Self::Labelframe => vec![
                OptionEntry::color("*Labelframe.foreground", &c.fg),
                OptionEntry::color("*Labelframe.highlightColor", &c.border),
                OptionEntry::color("*Labelframe.highlightBackground", &c.border),
                OptionEntry::new("*Labelframe.highlightThickness", 1),
            ],
            Self::Scrollbar | Self::OptionMenu => return Ok(LegacyOutcome::Unsupported),
            Self::Text => vec![
                OptionEntry::color("*Text*background", &c.light),
                OptionEntry::color("*Text*foreground", &c.inputfg),
            ],
            Self::ComboboxPopdown => vec![OptionEntry::color("*TCombobox*Listbox.background", &c.bg)],
        };
        Ok(LegacyOutcome::Options(entries))
    }
}

/// Entries for every supported legacy widget, in styling order
pub fn legacy_options(definition: &ThemeDefinition) -> Result<Vec<OptionEntry>> {
    let mut entries = Vec::new();
    for widget in LegacyWidget::ALL {
        match widget.options(definition)? {
            LegacyOutcome::Options(options) => entries.extend(options),
            LegacyOutcome::Unsupported => {
                tracing::debug!(
                    widget = widget.name(),
                    "legacy widget can only be styled at construction, skipping"
                );
            }
        }
    }
    Ok(entries)
}

/// Write `entries` to the toolkit and repaint the root window background
pub fn apply_legacy_options<T: Toolkit + ?Sized>(
    definition: &ThemeDefinition,
    entries: &[OptionEntry],
    toolkit: &mut T,
) {
    toolkit.configure_root_background(&definition.colors().bg);
    for entry in entries {
        toolkit.option_add(&entry.pattern, &entry.value, entry.priority);
    }
}

/// Style every legacy widget class for `definition`
pub fn style_legacy_widgets<T: Toolkit + ?Sized>(
    definition: &ThemeDefinition,
    toolkit: &mut T,
) -> Result<()> {
    let entries = legacy_options(definition)?;
    apply_legacy_options(definition, &entries, toolkit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessToolkit;
    use bootstyle_core::{ColorKey, Palette, ThemeKind};

    fn darkly() -> ThemeDefinition {
        ThemeDefinition::new("darkly", ThemeKind::Dark).with_colors(
            Palette::default()
                .with(ColorKey::Primary, "#375a7f")
                .with(ColorKey::Bg, "#222222")
                .with(ColorKey::Light, "#ffffff"),
        )
    }

    fn find<'a>(entries: &'a [OptionEntry], pattern: &str) -> &'a OptionEntry {
        entries
            .iter()
            .find(|e| e.pattern == pattern)
            .unwrap_or_else(|| panic!("missing {pattern}"))
    }

    #[test]
    fn test_unsupported_widgets() {
        let def = ThemeDefinition::default();
        assert_eq!(
            LegacyWidget::Scrollbar.options(&def).unwrap(),
            LegacyOutcome::Unsupported
        );
        assert_eq!(
            LegacyWidget::OptionMenu.options(&def).unwrap(),
            LegacyOutcome::Unsupported
        );
    }

    #[test]
    fn test_window_defaults_have_priority() {
        let entries = legacy_options(&darkly()).unwrap();
        let background = find(&entries, "*background");
        assert_eq!(background.value, Value::color("#222222"));
        assert_eq!(background.priority, Some(WINDOW_PRIORITY));
        assert_eq!(find(&entries, "*font").priority, None);
    }

    #[test]
    fn test_dark_fields_are_shaded() {
        let entries = legacy_options(&darkly()).unwrap();
        assert_eq!(find(&entries, "*Entry.background").value, Value::color("#e5e5e5"));
        assert_eq!(find(&entries, "*Text*background").value, Value::color("#ffffff"));
        assert_eq!(
            find(&entries, "*Checkbutton.selectColor").value,
            Value::color("#375a7f")
        );
    }

    #[test]
    fn test_restyling_converges() {
        let mut toolkit = HeadlessToolkit::new();
        style_legacy_widgets(&darkly(), &mut toolkit).unwrap();
        let first = toolkit.options().clone();
        assert_eq!(toolkit.root_background(), Some("#222222"));

        style_legacy_widgets(&ThemeDefinition::default(), &mut toolkit).unwrap();
        style_legacy_widgets(&darkly(), &mut toolkit).unwrap();
        style_legacy_widgets(&darkly(), &mut toolkit).unwrap();
        assert_eq!(toolkit.options(), &first);
        assert_eq!(toolkit.root_background(), Some("#222222"));
        assert_eq!(toolkit.option("*Entry.background"), Some(&Value::color("#e5e5e5")));
    }

    #[test]
    fn test_light_fields_are_plain() {
        let def = ThemeDefinition::new("flatly", ThemeKind::Light)
            .with_colors(Palette::default().with(ColorKey::Light, "#ecf0f1"));
        let entries = legacy_options(&def).unwrap();
        assert_eq!(find(&entries, "*Listbox.background").value, Value::color("#ecf0f1"));
        assert_eq!(
            find(&entries, "*Radiobutton.selectColor").value,
            Value::color("#ffffff")
        );
    }
}
