//! Check and radio buttons
//!
//! On toolkits whose indicators ignore color options, the indicator element
//! is taken from `xpnative` and the base rules leave every `indicator*`
//! option out. Variant rules keep them so they still apply wherever the
//! indicator element does honor them.

use crate::compiler::{color, is, Accent, CompileContext, FamilyId, Fragment, WidgetFamily, PRESSED};
use crate::error::Result;
use crate::style::{BaseTheme, State, StyleRule};

fn native_indicator(ctx: &CompileContext<'_>, element: &str) -> Fragment {
    let mut fragment = Fragment::new();
    if !ctx.capabilities().custom_indicator_colors {
        fragment.insert(element, StyleRule::borrowed(BaseTheme::Xpnative));
    }
    fragment
}

fn styles_indicator(ctx: &CompileContext<'_>, accent: &Accent<'_>) -> bool {
    ctx.capabilities().custom_indicator_colors || !accent.is_base()
}

pub struct Checkbutton;

impl WidgetFamily for Checkbutton {
    fn id(&self) -> FamilyId {
        FamilyId::Checkbutton
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TCheckbutton"]
    }

    fn shared(&self, ctx: &CompileContext<'_>) -> Result<Fragment> {
        Ok(native_indicator(ctx, "Checkbutton.indicator"))
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let mut rule = StyleRule::new()
            .set("foreground", color(&p.fg))
            .map("foreground", [(is(State::Active), color(c))]);

        if styles_indicator(ctx, &accent) {
            let active = ctx.shade(c, PRESSED)?;
            let active_selected = is(State::Active).and(State::Selected);
            rule = rule
                .set("indicatorsize", 10)
                .set("indicatormargin", 10)
                .set("indicatorforeground", color(&p.selectfg))
                .map(
                    "indicatorbackground",
                    [
                        (active_selected.clone(), color(&active)),
                        (is(State::Selected), color(&p.fg)),
                        (is(State::Active).and_not(State::Selected), color(&p.light)),
                    ],
                )
                .map(
                    "indicatorforeground",
                    [
                        (active_selected, color(&active)),
                        (is(State::Selected), color(c)),
                    ],
                );
        }
        Ok(Fragment::new().rule(accent.key("TCheckbutton"), rule))
    }
}

pub struct Radiobutton;

impl WidgetFamily for Radiobutton {
    fn id(&self) -> FamilyId {
        FamilyId::Radiobutton
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TRadiobutton"]
    }

    fn shared(&self, ctx: &CompileContext<'_>) -> Result<Fragment> {
        Ok(native_indicator(ctx, "Radiobutton.indicator"))
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let kind = ctx.kind();
        let c = accent.color();
        let mut rule = StyleRule::new().map("foreground", [(is(State::Active), color(c))]);

        if styles_indicator(ctx, &accent) {
            let ring = kind.pick(&p.fg, &p.light);
            rule = rule
                .set("indicatormargin", 8)
                .set("indicatorsize", 12)
                .set("upperbordercolor", color(ring))
                .set("lowerbordercolor", color(ring))
                .set("indicatorforeground", color(kind.pick(&p.fg, &p.bg)))
                .map("indicatorforeground", [(is(State::Active), color(c))]);
        }
        Ok(Fragment::new().rule(accent.key("TRadiobutton"), rule))
    }
}
