use crate::compiler::{color, is, not, Accent, CompileContext, FamilyId, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::{State, StyleRule};

/// Tabbed notebooks. Accents only color the selected tab's top edge; every
/// unselected tab looks the same whatever the variant.
pub struct Notebook;

impl WidgetFamily for Notebook {
    fn id(&self) -> FamilyId {
        FamilyId::Notebook
    }

    fn classes(&self) -> &'static [&'static str] {
        &["TNotebook", "TNotebook.Tab"]
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let p = ctx.palette();
        let edge = ctx.kind().pick(&p.bg, &p.selectbg);
        let unselected = || not(State::Selected);

        let notebook = StyleRule::new()
            .set("bordercolor", color(&p.border))
            .set("lightcolor", color(edge))
            .set("borderwidth", 1);

        let tab = StyleRule::new()
            .set("bordercolor", color(&p.border))
            .set("lightcolor", color(edge))
            .set("foreground", color(&p.fg))
            .set("padding", [10, 5])
            .map("background", [(unselected(), color(&p.light))])
            .map(
                "lightcolor",
                [
                    (unselected(), color(&p.light)),
                    (is(State::Selected), color(accent.color())),
                ],
            )
            .map("darkcolor", [(unselected(), color(&p.light))])
            .map("bordercolor", [(unselected(), color(&p.border))])
            .map("foreground", [(unselected(), color(&p.inputfg))]);

        Ok(Fragment::new()
            .rule(accent.key("TNotebook"), notebook)
            .rule(accent.key("TNotebook.Tab"), tab))
    }
}
