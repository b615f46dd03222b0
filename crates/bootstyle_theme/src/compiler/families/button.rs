//! Solid and outline push buttons

use crate::compiler::{color, is, pressed_hover, Accent, CompileContext, FamilyId, Fragment, WidgetFamily, HOVER, PRESSED};
use crate::error::Result;
use crate::style::{State, StyleRule};

/// Border-drawing options that track the button face
pub(super) const FACE_OPTIONS: [&str; 4] = ["background", "bordercolor", "darkcolor", "lightcolor"];

/// Map every face option to the shaded accent for `pressed` and `hover`
pub(super) fn shade_face(ctx: &CompileContext<'_>, rule: StyleRule, accent: &str) -> Result<StyleRule> {
    let pressed = ctx.shade(accent, PRESSED)?;
    let hover = ctx.shade(accent, HOVER)?;
    Ok(FACE_OPTIONS
        .iter()
        .fold(rule, |rule, option| rule.map(option, pressed_hover(&pressed, &hover))))
}

/// Text that turns to `selectfg` once an outline widget fills in
pub(super) fn fill_in(option: &str, ctx: &CompileContext<'_>, rule: StyleRule) -> StyleRule {
    let selectfg = &ctx.palette().selectfg;
    rule.map(
        option,
        [
            (is(State::Pressed), color(selectfg)),
            (is(State::Hover), color(selectfg)),
        ],
    )
}

pub struct SolidButton;

impl WidgetFamily for SolidButton {
    fn id(&self) -> FamilyId {
        FamilyId::SolidButton
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TButton"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let c = accent.color();
        let rule = StyleRule::new()
            .set("foreground", color(&ctx.palette().selectfg))
            .set("background", color(c))
            .set("bordercolor", color(c))
            .set("darkcolor", color(c))
            .set("lightcolor", color(c))
            .set("anchor", "center")
            .set("relief", "raised")
            .set("focusthickness", 0)
            .set("focuscolor", "")
            .set("padding", [10, 5]);
        let rule = shade_face(ctx, rule, c)?;
        Ok(Fragment::new().rule(accent.key("TButton"), rule))
    }
}

pub struct OutlineButton;

impl WidgetFamily for OutlineButton {
    fn id(&self) -> FamilyId {
        FamilyId::OutlineButton
    }

    fn classes(&self) -> &'static [&'static str] {
        &["Outline.TButton"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let rule = StyleRule::new()
            .set("foreground", color(c))
            .set("background", color(&p.bg))
            .set("bordercolor", color(c))
            .set("darkcolor", color(&p.bg))
            .set("lightcolor", color(&p.bg))
            .set("relief", "raised")
            .set("focusthickness", 0)
            .set("focuscolor", "")
            .set("padding", [10, 5]);
        let rule = fill_in("foreground", ctx, rule);
        let rule = shade_face(ctx, rule, c)?;
        Ok(Fragment::new().rule(accent.key("Outline.TButton"), rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerConfig;
    use crate::platform::Capabilities;
    use crate::style::Value;
    use bootstyle_core::{ColorKey, Palette, ThemeDefinition, ThemeKind, Variant};

    fn definition() -> ThemeDefinition {
        ThemeDefinition::new("cosmo", ThemeKind::Light).with_colors(
            Palette::default()
                .with(ColorKey::Primary, "#2780e3")
                .with(ColorKey::Danger, "#ff0039"),
        )
    }

    #[test]
    fn test_solid_danger_button() {
        let def = definition();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&def, Capabilities::default(), &config);
        let accent = Accent::variant(Variant::Danger, "#ff0039");
        let fragment = SolidButton.expand(&ctx, accent).unwrap();
        let rule = fragment.get("danger.TButton").unwrap();

        assert_eq!(rule.get("background"), Some(&Value::color("#ff0039")));
        assert_eq!(
            rule.resolve("background", &[State::Pressed, State::Hover]),
            Some(&Value::color("#cc002d"))
        );
        assert_eq!(
            rule.resolve("bordercolor", &[State::Hover]),
            Some(&Value::color("#e50033"))
        );
    }

    #[test]
    fn test_outline_text_fills_in() {
        let def = definition();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&def, Capabilities::default(), &config);
        let fragment = OutlineButton.expand(&ctx, Accent::base(def.colors())).unwrap();
        let rule = fragment.get("Outline.TButton").unwrap();

        assert_eq!(rule.get("foreground"), Some(&Value::color("#2780e3")));
        assert_eq!(
            rule.resolve("foreground", &[State::Hover]),
            Some(&Value::color("#ffffff"))
        );
    }
}
