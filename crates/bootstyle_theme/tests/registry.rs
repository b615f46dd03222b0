use std::sync::Arc;

use bootstyle_theme::{
    AssetKey, Capabilities, ColorKey, CompilerConfig, HeadlessToolkit, Palette, ThemeDefinition,
    ThemeError, ThemeKind, ThemePreset, ThemeRegistry, Toolkit, Value,
};
use pretty_assertions::assert_eq;

fn registry_with_presets() -> ThemeRegistry<HeadlessToolkit> {
    let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
    let failures = registry.register_all(ThemePreset::all().iter().map(|p| p.definition()));
    assert!(failures.is_empty(), "{failures:?}");
    registry
}

fn broken(name: &str) -> ThemeDefinition {
    ThemeDefinition::new(name, ThemeKind::Light)
        .with_colors(Palette::default().with(ColorKey::Primary, "#12345"))
}

#[test]
fn registers_every_preset() {
    let registry = registry_with_presets();
    assert_eq!(registry.len(), ThemePreset::all().len());

    let names = registry.toolkit().theme_names();
    for preset in ThemePreset::all() {
        assert!(names.contains(&preset.id().to_string()), "{preset}");
        assert!(registry.toolkit().installed(preset.id()).is_some());
    }
}

#[test]
fn registering_twice_is_a_no_op() {
    let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
    assert!(registry.register(ThemePreset::Minty.definition()).unwrap());
    let first = registry.compiled("minty").unwrap().shared_table();

    assert!(!registry.register(ThemePreset::Minty.definition()).unwrap());
    assert_eq!(registry.len(), 1);
    assert!(Arc::ptr_eq(
        &first,
        &registry.compiled("minty").unwrap().shared_table()
    ));
}

#[test]
fn invalid_palette_registers_nothing() {
    let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
    let err = registry.register(broken("broken")).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidColorFormat(_)));
    assert!(registry.is_empty());
    assert!(registry.toolkit().installed("broken").is_none());
}

#[test]
fn failures_do_not_stop_other_registrations() {
    let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
    let failures = registry.register_all([
        ThemePreset::Cosmo.definition(),
        broken("broken"),
        ThemePreset::Darkly.definition(),
    ]);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "broken");
    assert_eq!(
        registry.known_theme_names().into_iter().collect::<Vec<_>>(),
        ["cosmo", "darkly"]
    );
}

#[test]
fn unknown_theme_keeps_the_active_one() {
    let mut registry = ThemeRegistry::new(HeadlessToolkit::new());
    registry.register(ThemePreset::Superhero.definition()).unwrap();
    registry.register(ThemePreset::Cosmo.definition()).unwrap();
    registry.activate("superhero").unwrap();

    let err = registry.activate("solar").unwrap_err();
    match &err {
        ThemeError::UnknownTheme { name, known } => {
            assert_eq!(name, "solar");
            assert_eq!(known, &["cosmo", "superhero"]);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "solar is not a valid theme name. Please try one of the following: cosmo, superhero"
    );
    assert_eq!(registry.active_name(), Some("superhero"));
    assert_eq!(registry.toolkit().active_theme(), Some("superhero"));
    assert_eq!(registry.toolkit().theme_switches(), 1);
}

#[test]
fn activating_the_current_theme_does_nothing() {
    let mut registry = registry_with_presets();
    registry.activate("flatly").unwrap();
    let options = registry.toolkit().options().clone();

    registry.activate("flatly").unwrap();
    assert_eq!(registry.toolkit().theme_switches(), 1);
    assert_eq!(registry.toolkit().options(), &options);
}

#[test]
fn toolkit_shares_the_compiled_table() {
    let mut registry = registry_with_presets();
    registry.activate("cyborg").unwrap();

    let installed = registry.toolkit().installed("cyborg").unwrap();
    let compiled = registry.compiled("cyborg").unwrap();
    assert!(Arc::ptr_eq(installed.table(), &compiled.shared_table()));
}

#[test]
fn installed_images_live_as_long_as_the_registry() {
    let registry = registry_with_presets();
    for preset in ThemePreset::all() {
        let installed = registry.toolkit().installed(preset.id()).unwrap();
        assert_eq!(installed.image_count(), 22, "{preset}");
        assert_eq!(installed.live_images(), installed.image_count(), "{preset}");
        assert!(installed.image(&AssetKey::Trough).is_some());
    }
}

#[test]
fn switching_back_restores_legacy_options() {
    let mut registry = registry_with_presets();
    registry.activate("cosmo").unwrap();
    let cosmo = registry.toolkit().options().clone();

    registry.activate("darkly").unwrap();
    assert_eq!(registry.toolkit().root_background(), Some("#222222"));
    assert_ne!(registry.toolkit().options(), &cosmo);

    registry.activate("cosmo").unwrap();
    assert_eq!(registry.toolkit().options(), &cosmo);
    assert_eq!(registry.toolkit().root_background(), Some("#ffffff"));
    assert_eq!(registry.toolkit().theme_switches(), 3);
}

#[test]
fn window_options_use_raised_priority() {
    let mut registry = registry_with_presets();
    registry.activate("journal").unwrap();
    let record = registry.toolkit().options().get("*background").unwrap();
    assert_eq!(record.value, Value::color("#ffffff"));
    assert_eq!(record.priority, Some(20));
}

#[test]
fn current_palette_follows_activation() {
    let mut registry = registry_with_presets();
    assert_eq!(registry.current_palette(), &Palette::default());

    registry.activate("litera").unwrap();
    assert_eq!(registry.current_palette().primary, "#4582ec");
    assert_eq!(registry.current_definition().unwrap().kind(), ThemeKind::Light);
}

#[test]
fn native_indicator_toolkits_are_probed() {
    let toolkit = HeadlessToolkit::with_native_themes(["clam", "alt", "xpnative"]);
    let mut registry = ThemeRegistry::new(toolkit);
    assert!(!registry.capabilities().custom_indicator_colors);

    registry.register(ThemePreset::Cosmo.definition()).unwrap();
    let table = registry.compiled("cosmo").unwrap().table();
    assert!(table.contains_key("Checkbutton.indicator"));
    assert!(!table.get("TCheckbutton").unwrap().mentions("indicatorsize"));
}

#[test]
fn configured_capabilities_override_the_probe() {
    let config = CompilerConfig::default().with_capabilities(Capabilities {
        custom_indicator_colors: true,
        native_slider_thumb: true,
    });
    let toolkit = HeadlessToolkit::with_native_themes(["xpnative"]);
    let mut registry = ThemeRegistry::with_config(toolkit, config);
    assert!(registry.capabilities().custom_indicator_colors);

    registry.register(ThemePreset::Cosmo.definition()).unwrap();
    let installed = registry.toolkit().installed("cosmo").unwrap();
    assert_eq!(installed.image_count(), 0);
}
