use crate::compiler::{color, is, Accent, CompileContext, FamilyId, Fragment, WidgetFamily, HOVER, PRESSED};
use crate::error::Result;
use crate::style::{BaseTheme, State, StyleRule};

/// Scrollbar elements taken from `alt`, whose thumb honors `background`
const ALT_ELEMENTS: [&str; 8] = [
    "Vertical.Scrollbar.trough",
    "Vertical.Scrollbar.thumb",
    "Vertical.Scrollbar.uparrow",
    "Vertical.Scrollbar.downarrow",
    "Horizontal.Scrollbar.trough",
    "Horizontal.Scrollbar.thumb",
    "Horizontal.Scrollbar.uparrow",
    "Horizontal.Scrollbar.downarrow",
];

pub struct Scrollbar;

impl WidgetFamily for Scrollbar {
    fn id(&self) -> FamilyId {
        FamilyId::Scrollbar
    }

    fn classes(&self) -> &'static [&'static str] {
        &["Horizontal.TScrollbar", "Vertical.TScrollbar"]
    }

    fn shared(&self, _ctx: &CompileContext<'_>) -> Result<Fragment> {
        Ok(ALT_ELEMENTS.iter().fold(Fragment::new(), |fragment, element| {
            fragment.rule(*element, StyleRule::borrowed(BaseTheme::Alt))
        }))
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let thumb = ctx.shade(&p.light, HOVER)?;
        let pressed = ctx.shade(c, PRESSED)?;
        let active = ctx.shade(c, HOVER)?;

        let mut fragment = Fragment::new();
        for class in self.classes() {
            let rule = StyleRule::new()
                .set("troughrelief", "flat")
                .set("relief", "flat")
                .set("troughborderwidth", 2)
                .set("troughcolor", color(&p.light))
                .set("background", color(&thumb))
                .set("arrowsize", 16)
                .set("arrowcolor", color(&p.inputfg))
                .map(
                    "background",
                    [
                        (is(State::Pressed), color(&pressed)),
                        (is(State::Active), color(&active)),
                    ],
                );
            fragment.insert(accent.key(class), rule);
        }
        Ok(fragment)
    }
}
