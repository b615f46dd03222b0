use crate::compiler::{color, is, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::{BaseTheme, LayoutNode, State, StyleRule};

pub struct Treeview;

impl WidgetFamily for Treeview {
    fn id(&self) -> FamilyId {
        FamilyId::Treeview
    }

    fn classes(&self) -> &'static [&'static str] {
        &["Treeview", "Treeview.Heading"]
    }

    fn shared(&self, _ctx: &CompileContext<'_>) -> Result<Fragment> {
        Ok(Fragment::new().rule("Treeitem.indicator", StyleRule::borrowed(BaseTheme::Alt)))
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let kind = ctx.kind();
        let c = accent.color();

        let layout = LayoutNode::new("Button.border")
            .sticky("nswe")
            .border(1)
            .children([LayoutNode::new("Treeview.padding")
                .sticky("nswe")
                .children([LayoutNode::new("Treeview.treearea").sticky("nswe")])]);
        let tree = StyleRule::new()
            .layout([layout])
            .set("background", color(&p.light))
            .set("foreground", color(&p.inputfg))
            .set("bordercolor", color(&p.border))
            .set("lightcolor", color(&p.bg))
            .set("darkcolor", color(&p.bg))
            .set("relief", kind.pick("raised", "flat"))
            .set("padding", kind.pick(-1, -2))
            .map("background", [(is(State::Selected), color(&p.selectbg))])
            .map("foreground", [(is(State::Selected), color(&p.selectfg))])
            .map("bordercolor", [(is(State::Focus), color(accent.or(&p.border)))]);

        let heading = StyleRule::new()
            .set("background", color(c))
            .set("foreground", color(&p.selectfg))
            .set("relief", "flat")
            .set("padding", 5)
            .map("bordercolor", [(is(State::Focus), color(c))]);

        Ok(Fragment::new()
            .rule(accent.key("Treeview"), tree)
            .rule(accent.key("Treeview.Heading"), heading))
    }
}
