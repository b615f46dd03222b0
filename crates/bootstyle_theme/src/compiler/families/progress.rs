//! Progress bars and separators
//!
//! Both draw a single bar of color. Unaccented, that is the border color on
//! light themes and the primary color on dark ones.

use crate::compiler::{color, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::{BaseTheme, StyleRule};

fn bar_color<'a>(ctx: &CompileContext<'a>, accent: &Accent<'a>) -> &'a str {
    let p = ctx.palette();
    accent.or(ctx.kind().pick(&p.border, &p.primary))
}

pub struct Progressbar;

impl WidgetFamily for Progressbar {
    fn id(&self) -> FamilyId {
        FamilyId::Progressbar
    }

    fn classes(&self) -> &'static [&'static str] {
        &["Horizontal.TProgressbar", "Vertical.TProgressbar"]
    }

    fn shared(&self, _ctx: &CompileContext<'_>) -> Result<Fragment> {
        Ok(Fragment::new()
            .rule("Progressbar.trough", StyleRule::borrowed(BaseTheme::Default))
            .rule("Progressbar.pbar", StyleRule::borrowed(BaseTheme::Default)))
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let trough = ctx.shade(&ctx.palette().light, -0.05)?;
        let bar = bar_color(ctx, &accent);
        let mut fragment = Fragment::new();
        for class in self.classes() {
            let rule = StyleRule::new()
                .set("thickness", 20)
                .set("borderwidth", 0)
                .set("troughcolor", color(&trough))
                .set("background", color(bar));
            fragment.insert(accent.key(class), rule);
        }
        Ok(fragment)
    }
}

pub struct Separator;

impl WidgetFamily for Separator {
    fn id(&self) -> FamilyId {
        FamilyId::Separator
    }

    fn classes(&self) -> &'static [&'static str] {
        &["Horizontal.TSeparator", "Vertical.TSeparator"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let bar = bar_color(ctx, &accent);
        Ok(self.classes().iter().fold(Fragment::new(), |fragment, class| {
            fragment.rule(accent.key(class), StyleRule::new().set("background", color(bar)))
        }))
    }
}
