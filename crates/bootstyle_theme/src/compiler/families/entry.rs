use crate::compiler::{color, is, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::{BaseTheme, State, StyleRule};

pub struct Entry;

impl WidgetFamily for Entry {
    fn id(&self) -> FamilyId {
        FamilyId::Entry
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TEntry"]
    }

    fn shared(&self, ctx: &CompileContext<'_>) -> Result<Fragment> {
        let mut fragment = Fragment::new();
        // clam's field ignores fieldbackground on dark palettes
        if ctx.is_dark() {
            fragment.insert("Entry.field", StyleRule::borrowed(BaseTheme::Default));
        }
        Ok(fragment)
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let rule = StyleRule::new()
            .set("fieldbackground", color(&p.light))
            .set("bordercolor", color(&p.bg))
            .set("lightcolor", color(&p.border))
            .set("darkcolor", color(&p.border))
            .set("foreground", color(&p.inputfg))
            .set("padding", 5)
            .map(
                "bordercolor",
                [(is(State::Focus), color(c)), (is(State::Hover), color(&p.bg))],
            )
            .map(
                "lightcolor",
                [(is(State::Focus), color(c)), (is(State::Hover), color(c))],
            )
            .map(
                "darkcolor",
                [(is(State::Focus), color(c)), (is(State::Hover), color(c))],
            );
        Ok(Fragment::new().rule(accent.key("TEntry"), rule))
    }
}
