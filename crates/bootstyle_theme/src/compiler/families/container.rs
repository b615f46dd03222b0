//! Labels, frames and other structural widgets.
//!
//! Unaccented, these use a structural palette color (text, window or
//! border); variants replace it with the variant color.

use crate::compiler::{color, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::StyleRule;

pub struct Label;

impl WidgetFamily for Label {
    fn id(&self) -> FamilyId {
        FamilyId::Label
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TLabel"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let fg = accent.or(&ctx.palette().fg);
        Ok(Fragment::new().rule(
            accent.key("TLabel"),
            StyleRule::new().set("foreground", color(fg)),
        ))
    }
}

pub struct Labelframe;

impl WidgetFamily for Labelframe {
    fn id(&self) -> FamilyId {
        FamilyId::Labelframe
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TLabelframe", "TLabelframe.Label"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let frame = StyleRule::new()
            .set("padding", [10, 5])
            .set("foreground", color(&p.fg))
            .set("relief", "raised")
            .set("bordercolor", color(accent.or(&p.border)))
            .set("darkcolor", color(&p.bg))
            .set("lightcolor", color(&p.bg));
        let label = StyleRule::new().set("foreground", color(accent.or(&p.fg)));
        Ok(Fragment::new()
            .rule(accent.key("TLabelframe"), frame)
            .rule(accent.key("TLabelframe.Label"), label))
    }
}

pub struct Frame;

impl WidgetFamily for Frame {
    fn id(&self) -> FamilyId {
        FamilyId::Frame
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TFrame"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let bg = accent.or(&ctx.palette().bg);
        Ok(Fragment::new().rule(
            accent.key("TFrame"),
            StyleRule::new().set("background", color(bg)),
        ))
    }
}

pub struct Panedwindow;

impl WidgetFamily for Panedwindow {
    fn id(&self) -> FamilyId {
        FamilyId::Panedwindow
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TPanedwindow"]
    }

    fn shared(&self, ctx: &CompileContext<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let sash = StyleRule::new()
            .set("bordercolor", color(&p.inputfg))
            .set("lightcolor", color(&p.light))
            .set("sashthickness", 9)
            .set("sashpad", 0)
            .set("gripcount", 25);
        Ok(Fragment::new().rule("Sash", sash))
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let neutral = ctx.shade(&ctx.palette().light, -0.1)?;
        Ok(Fragment::new().rule(
            accent.key("TPanedwindow"),
            StyleRule::new().set("background", color(accent.or(&neutral))),
        ))
    }
}
