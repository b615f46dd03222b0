//! Widget family implementations, in compilation order

mod button;
mod combobox;
mod container;
mod entry;
mod indicator;
mod menubutton;
mod notebook;
mod progress;
mod scale;
mod scrollbar;
mod spinbox;
mod treeview;

use super::{color, CompileContext, Fragment, WidgetFamily};
use crate::error::Result;
use crate::style::StyleRule;

static FAMILIES: [&dyn WidgetFamily; 19] = [
    &entry::Entry,
    &button::SolidButton,
    &button::OutlineButton,
    &indicator::Checkbutton,
    &indicator::Radiobutton,
    &combobox::Combobox,
    &spinbox::Spinbox,
    &scale::Scale,
    &scrollbar::Scrollbar,
    &notebook::Notebook,
    &treeview::Treeview,
    &progress::Progressbar,
    &progress::Separator,
    &container::Label,
    &container::Labelframe,
    &container::Frame,
    &menubutton::SolidMenubutton,
    &menubutton::OutlineMenubutton,
    &container::Panedwindow,
];

/// Every widget family, in the order their rules appear in the table
pub fn families() -> &'static [&'static dyn WidgetFamily] {
    &FAMILIES
}

/// The universal `.` rule every widget falls back to
pub(crate) fn defaults(ctx: &CompileContext<'_>) -> Result<Fragment> {
    let p = ctx.palette();
    let rule = StyleRule::new()
        .set("background", color(&p.bg))
        .set("darkcolor", color(&p.border))
        .set("foreground", color(&p.fg))
        .set("troughcolor", color(&p.bg))
        .set("selectbg", color(&p.selectbg))
        .set("selectfg", color(&p.selectfg))
        .set("selectforeground", color(&p.selectfg))
        .set("selectbackground", color(&p.selectbg))
        .set("fieldbg", color("#ffffff"))
        .set("font", ctx.font())
        .set("borderwidth", 1)
        .set("focuscolor", "");
    Ok(Fragment::new().rule(".", rule))
}
