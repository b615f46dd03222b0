use crate::compiler::{color, is, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::{BaseTheme, LayoutNode, Side, State, StyleRule};

pub struct Combobox;

impl WidgetFamily for Combobox {
    fn id(&self) -> FamilyId {
        FamilyId::Combobox
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TCombobox"]
    }

    fn shared(&self, ctx: &CompileContext<'_>) -> Result<Fragment> {
        let mut fragment = Fragment::new()
            .rule("Combobox.downarrow", StyleRule::borrowed(BaseTheme::Default))
            .rule("Combobox.padding", StyleRule::borrowed(BaseTheme::Clam))
            .rule("Combobox.textarea", StyleRule::borrowed(BaseTheme::Clam));
        // clam's field lets the window background show through its corners
        if ctx.is_dark() {
            fragment.insert("combo.Spinbox.field", StyleRule::borrowed(BaseTheme::Default));
        }
        Ok(fragment)
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let c = accent.color();
        let layout = LayoutNode::new("combo.Spinbox.field")
            .side(Side::Top)
            .sticky("we")
            .children([
                LayoutNode::new("Combobox.downarrow").side(Side::Right).sticky("ns"),
                LayoutNode::new("Combobox.padding")
                    .expand()
                    .sticky("nswe")
                    .children([LayoutNode::new("Combobox.textarea").sticky("nswe")]),
            ]);
        let rule = StyleRule::new()
            .layout([layout])
            .set("bordercolor", color(&p.border))
            .set("darkcolor", color(&p.bg))
            .set("lightcolor", color(&p.bg))
            .set("arrowcolor", color(&p.inputfg))
            .set("foreground", color(&p.inputfg))
            .set("fieldbackground", color(&p.light))
            .set("background", color(&p.light))
            .set("relief", "flat")
            .set("borderwidth", 0)
            .set("padding", 5)
            .set("arrowsize", 16)
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
                    (is(State::Pressed), color(&p.light)),
                    (is(State::Focus), color(&p.inputfg)),
                    (is(State::Hover), color(c)),
                ],
            );
        Ok(Fragment::new().rule(accent.key("TCombobox"), rule))
    }
}
