use crate::compiler::{color, is, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::{BaseTheme, LayoutNode, Side, State, StyleRule};

pub struct Spinbox;

impl WidgetFamily for Spinbox {
    fn id(&self) -> FamilyId {
        FamilyId::Spinbox
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TSpinbox"]
    }

    fn shared(&self, ctx: &CompileContext<'_>) -> Result<Fragment> {
        let mut fragment = Fragment::new();
        if ctx.is_dark() {
            fragment.insert("Spinbox.field", StyleRule::borrowed(BaseTheme::Default));
        }
        fragment.insert("Spinbox.uparrow", StyleRule::borrowed(BaseTheme::Default));
        fragment.insert("Spinbox.downarrow", StyleRule::borrowed(BaseTheme::Default));
        Ok(fragment)
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let arrows = LayoutNode::new("null").side(Side::Right).children([
            LayoutNode::new("Spinbox.uparrow").side(Side::Top).sticky("e"),
            LayoutNode::new("Spinbox.downarrow").side(Side::Bottom).sticky("e"),
        ]);
        let layout = LayoutNode::new("custom.Spinbox.field")
            .side(Side::Top)
            .sticky("we")
            .children([
                arrows,
                LayoutNode::new("Spinbox.padding")
                    .sticky("nswe")
                    .children([LayoutNode::new("Spinbox.textarea").sticky("nswe")]),
            ]);
        let rule = StyleRule::new()
            .layout([layout])
            .set("fieldbackground", color(&p.light))
            .set("bordercolor", color(&p.bg))
            .set("lightcolor", color(&p.border))
            .set("darkcolor", color(&p.border))
            .set("foreground", color(&p.inputfg))
            .set("borderwidth", 0)
            .set("background", color(&p.light))
            .set("relief", "flat")
            .set("arrowcolor", color(&p.inputfg))
            .set("arrowsize", 16)
            .set("padding", [10, 5])
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
            )
            .map(
                "arrowcolor",
                [
                    (is(State::Pressed), color(c)),
                    (is(State::Focus), color(&p.inputfg)),
                    (is(State::Hover), color(&p.inputfg)),
                ],
            );
        Ok(Fragment::new().rule(accent.key("TSpinbox"), rule))
    }
}
