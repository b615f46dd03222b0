//! Built-in theme presets based on the Bootswatch palettes.

use std::fmt::{Display, Formatter};

use bootstyle_core::{ColorKey, Palette, ThemeDefinition, ThemeKind};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Cosmo,
    Flatly,
    Journal,
    Litera,
    Minty,
    Darkly,
    Cyborg,
    Superhero,
}

impl ThemePreset {
    /// Stable preset id; also the registered theme name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Cosmo => "cosmo",
            Self::Flatly => "flatly",
            Self::Journal => "journal",
            Self::Litera => "litera",
            Self::Minty => "minty",
            Self::Darkly => "darkly",
            Self::Cyborg => "cyborg",
            Self::Superhero => "superhero",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cosmo => "Cosmo",
            Self::Flatly => "Flatly",
            Self::Journal => "Journal",
            Self::Litera => "Litera",
            Self::Minty => "Minty",
            Self::Darkly => "Darkly",
            Self::Cyborg => "Cyborg",
            Self::Superhero => "Superhero",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 8] = [
            ThemePreset::Cosmo,
            ThemePreset::Flatly,
            ThemePreset::Journal,
            ThemePreset::Litera,
            ThemePreset::Minty,
            ThemePreset::Darkly,
            ThemePreset::Cyborg,
            ThemePreset::Superhero,
        ];
        &PRESETS
    }

    /// Look up a preset by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    pub fn kind(self) -> ThemeKind {
        match self {
            Self::Darkly | Self::Cyborg | Self::Superhero => ThemeKind::Dark,
            _ => ThemeKind::Light,
        }
    }

    /// Build the definition for this preset.
    pub fn definition(self) -> ThemeDefinition {
        let colors = match self {
            Self::Cosmo => palette(COSMO),
            Self::Flatly => palette(FLATLY),
            Self::Journal => palette(JOURNAL),
            Self::Litera => palette(LITERA),
            Self::Minty => palette(MINTY),
            Self::Darkly => palette(DARKLY),
            Self::Cyborg => palette(CYBORG),
            Self::Superhero => palette(SUPERHERO),
        };
        ThemeDefinition::new(self.id(), self.kind())
            .with_font("helvetica")
            .with_colors(colors)
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Definitions of every preset, in catalog order.
pub fn preset_definitions() -> Vec<ThemeDefinition> {
    ThemePreset::all().iter().map(|p| p.definition()).collect()
}

fn palette(colors: [&str; 13]) -> Palette {
    ColorKey::ALL
        .into_iter()
        .zip(colors)
        .fold(Palette::default(), |palette, (key, value)| palette.with(key, value))
}

// primary, secondary, success, info, warning, danger,
// bg, fg, selectbg, selectfg, light, border, inputfg
const COSMO: [&str; 13] = [
    "#2780e3", "#373a3c", "#3fb618", "#9954bb", "#ff7518", "#ff0039",
    "#ffffff", "#373a3c", "#373a3c", "#ffffff", "#f8f9fa", "#ced4da", "#373a3c",
];
const FLATLY: [&str; 13] = [
    "#2c3e50", "#95a5a6", "#18bc9c", "#3498db", "#f39c12", "#e74c3c",
    "#ffffff", "#212529", "#95a5a6", "#ffffff", "#ecf0f1", "#ced4da", "#212529",
];
const JOURNAL: [&str; 13] = [
    "#eb6864", "#aaaaaa", "#22b24c", "#336699", "#f5e625", "#f57a00",
    "#ffffff", "#222222", "#aaaaaa", "#ffffff", "#f8f9fa", "#ced4da", "#495057",
];
const LITERA: [&str; 13] = [
    "#4582ec", "#adb5bd", "#02b875", "#17a2b8", "#f0ad4e", "#d9534f",
    "#ffffff", "#343a40", "#adb5bd", "#ffffff", "#f8f9fa", "#bfbfbf", "#343a40",
];
const MINTY: [&str; 13] = [
    "#78c2ad", "#f3969a", "#56cc9d", "#6cc3d5", "#ffce67", "#ff7851",
    "#ffffff", "#5a5a5a", "#f3969a", "#ffffff", "#f8f9fa", "#ced4da", "#696969",
];
const DARKLY: [&str; 13] = [
    "#375a7f", "#444444", "#00bc8c", "#3498db", "#f39c12", "#e74c3c",
    "#222222", "#ffffff", "#555555", "#ffffff", "#2f2f2f", "#222222", "#ffffff",
];
const CYBORG: [&str; 13] = [
    "#2a9fd6", "#555555", "#77b300", "#9933cc", "#ff8800", "#cc0000",
    "#060606", "#ffffff", "#555555", "#ffffff", "#222222", "#060606", "#ffffff",
];
const SUPERHERO: [&str; 13] = [
    "#4c9be8", "#4e5d6c", "#5cb85c", "#5bc0de", "#ffc107", "#d9534f",
    "#2b3e50", "#ffffff", "#526170", "#ffffff", "#4e5d6c", "#222222", "#ebebeb",
];
