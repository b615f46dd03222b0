//! Solid and outline menubuttons

use super::button::{fill_in, shade_face};
use crate::compiler::{color, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::StyleRule;

pub struct SolidMenubutton;

impl WidgetFamily for SolidMenubutton {
    fn id(&self) -> FamilyId {
        FamilyId::SolidMenubutton
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TMenubutton"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let rule = StyleRule::new()
            .set("foreground", color(&p.selectfg))
            .set("background", color(c))
            .set("bordercolor", color(c))
            .set("darkcolor", color(c))
            .set("lightcolor", color(c))
            .set("arrowcolor", color(ctx.kind().pick(p.bg.as_str(), "#ffffff")))
            .set("arrowpadding", [0, 0, 15, 0])
            .set("relief", "raised")
            .set("focusthickness", 0)
            .set("focuscolor", "")
            .set("padding", [10, 5]);
        let rule = shade_face(ctx, rule, c)?;
        Ok(Fragment::new().rule(accent.key("TMenubutton"), rule))
    }
}

pub struct OutlineMenubutton;

impl WidgetFamily for OutlineMenubutton {
    fn id(&self) -> FamilyId {
        FamilyId::OutlineMenubutton
    }

    fn classes(&self) -> &'static [&'static str] {
        &["Outline.TMenubutton"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let rule = StyleRule::new()
            .set("font", ctx.font())
            .set("foreground", color(c))
            .set("background", color(&p.bg))
            .set("bordercolor", color(c))
            .set("darkcolor", color(&p.bg))
            .set("lightcolor", color(&p.bg))
            .set("arrowcolor", color(c))
            .set("arrowpadding", [0, 0, 15, 0])
            .set("relief", "raised")
            .set("focusthickness", 0)
            .set("focuscolor", "")
            .set("padding", [10, 5]);
        let rule = fill_in("foreground", ctx, rule);
        let rule = shade_face(ctx, rule, c)?;
        let rule = fill_in("arrowcolor", ctx, rule);
        Ok(Fragment::new().rule(accent.key("Outline.TMenubutton"), rule))
    }
}
