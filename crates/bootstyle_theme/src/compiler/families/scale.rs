//! Sliders
//!
//! The default toolkit thumb cannot be recolored, so each accent gets three
//! synthesized circular glyphs (regular, pressed, hover) and an image
//! element that swaps between them. All sliders share one trough swatch.
//! Hosts whose toolkit draws a colorable thumb can switch to flat color
//! rules with [`Capabilities::native_slider_thumb`].
//!
//! [`Capabilities::native_slider_thumb`]: crate::platform::Capabilities::native_slider_thumb

use bootstyle_image::{slider_glyph, solid_swatch};

use crate::compiler::{color, is, pressed_hover, Accent, CompileContext, FamilyId, Fragment, WidgetFamily, HOVER, PRESSED};
use crate::error::Result;
use crate::style::{AssetKey, LayoutNode, Side, SliderState, State, StyleRule};

const TROUGH_SHADE: f64 = -0.05;

#[derive(Clone, Copy)]
enum Orient {
    Horizontal,
    Vertical,
}

impl Orient {
    const ALL: [Orient; 2] = [Orient::Horizontal, Orient::Vertical];

    fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        }
    }

    fn track_sticky(self) -> &'static str {
        match self {
            Self::Horizontal => "we",
            Self::Vertical => "ns",
        }
    }

    fn slider_side(self) -> Side {
        match self {
            Self::Horizontal => Side::Left,
            Self::Vertical => Side::Top,
        }
    }
}

pub struct Scale;

impl Scale {
    fn images(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let c = accent.color();
        let diameter = ctx.config().slider_diameter;
        let slider = |state| AssetKey::Slider {
            accent: accent.variant_id(),
            state,
        };

        let mut fragment = Fragment::new();
        for state in SliderState::ALL {
            let delta = match state {
                SliderState::Regular => 0.0,
                SliderState::Pressed => PRESSED,
                SliderState::Hover => HOVER,
            };
            let shade = ctx.shade(c, delta)?;
            fragment.insert_asset(slider(state), slider_glyph(&shade, diameter)?);
        }

        let prefix = accent.prefix();
        for orient in Orient::ALL {
            let element = format!("{prefix}{}.Scale.slider", orient.name());
            fragment.insert(
                element.clone(),
                StyleRule::image(
                    slider(SliderState::Regular),
                    vec![
                        (is(State::Pressed), slider(SliderState::Pressed)),
                        (is(State::Hover), slider(SliderState::Hover)),
                    ],
                ),
            );

            let layout = LayoutNode::new("Scale.focus").expand().sticky("nswe").children([
                LayoutNode::new(format!("{}.Scale.track", orient.name())).sticky(orient.track_sticky()),
                LayoutNode::new(element).side(orient.slider_side()),
            ]);
            fragment.insert(
                accent.key(&format!("{}.TScale", orient.name())),
                StyleRule::new().layout([layout]),
            );
        }
        Ok(fragment)
    }

    fn flat(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        let c = accent.color();
        let trough = ctx.shade(&ctx.palette().light, TROUGH_SHADE)?;
        let pressed = ctx.shade(c, PRESSED)?;
        let hover = ctx.shade(c, HOVER)?;

        let mut fragment = Fragment::new();
        for orient in Orient::ALL {
            let rule = StyleRule::new()
                .set("background", color(c))
                .set("troughcolor", color(&trough))
                .set("sliderrelief", "flat")
                .map("background", pressed_hover(&pressed, &hover));
            fragment.insert(accent.key(&format!("{}.TScale", orient.name())), rule);
        }
        Ok(fragment)
    }
}

impl WidgetFamily for Scale {
    fn id(&self) -> FamilyId {
        FamilyId::Scale
    }

    fn classes(&self) -> &'static [&'static str] {
        &["Horizontal.TScale", "Vertical.TScale"]
    }

    fn shared(&self, ctx: &CompileContext<'_>) -> Result<Fragment> {
        let mut fragment = Fragment::new();
        if ctx.capabilities().native_slider_thumb {
            return Ok(fragment);
        }
        let size = ctx.config().trough_size;
        let trough = ctx.shade(&ctx.palette().light, TROUGH_SHADE)?;
        fragment.insert_asset(AssetKey::Trough, solid_swatch(&trough, size, size)?);
        fragment.insert("Scale.track", StyleRule::image(AssetKey::Trough, Vec::new()));
        Ok(fragment)
    }

    fn expand(&self, ctx: &CompileContext<'_>, accent: Accent<'_>) -> Result<Fragment> {
        if ctx.capabilities().native_slider_thumb {
            self.flat(ctx, accent)
        } else {
            self.images(ctx, accent)
        }
    }
}
