//! Slider glyphs and trough swatches

use bootstyle_core::Rgb;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::bitmap::Bitmap;
use crate::error::{ImageError, Result};

/// Side of the square canvas glyphs are drawn on before downsampling
pub const CANVAS_SIZE: u32 = 100;

/// The circle fills the inclusive box (0, 0)-(95, 95) of the canvas
const CIRCLE_EXTENT: f64 = 96.0;

fn opaque(color: &str) -> Result<Rgba<u8>> {
    let [r, g, b] = Rgb::from_hex(color)?.to_rgb8();
    Ok(Rgba([r, g, b, 255]))
}

/// Draw a filled circle of `color` and downsample it to `diameter` pixels.
///
/// The hard-edged circle is rendered at [`CANVAS_SIZE`] and the Lanczos
/// resampling provides the anti-aliasing.
pub fn slider_glyph(color: &str, diameter: u32) -> Result<Bitmap> {
    if diameter == 0 {
        return Err(ImageError::ZeroSize);
    }
    let fill = opaque(color)?;
    // Resampling blends straight alpha; the clear background keeps the fill RGB
    let [r, g, b, _] = fill.0;
    let clear = Rgba([r, g, b, 0]);

    let radius = CIRCLE_EXTENT / 2.0;
    let canvas = RgbaImage::from_fn(CANVAS_SIZE, CANVAS_SIZE, |x, y| {
        let dx = f64::from(x) + 0.5 - radius;
        let dy = f64::from(y) + 0.5 - radius;
        if dx * dx + dy * dy <= radius * radius {
            fill
        } else {
            clear
        }
    });

    let glyph = imageops::resize(&canvas, diameter, diameter, FilterType::Lanczos3);
    tracing::trace!("synthesized {diameter}px slider glyph for {color}");
    Ok(Bitmap::from(glyph))
}

/// A flat, fully opaque rectangle of `color`
pub fn solid_swatch(color: &str, width: u32, height: u32) -> Result<Bitmap> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroSize);
    }
    let fill = opaque(color)?;
    Ok(Bitmap::from(RgbaImage::from_pixel(width, height, fill)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstyle_core::ColorError;
    use pretty_assertions::assert_eq;

    fn close(a: u8, b: u8) -> bool {
        (i16::from(a) - i16::from(b)).abs() <= 1
    }

    #[test]
    fn test_glyph_dimensions() {
        let glyph = slider_glyph("#2780e3", 18).unwrap();
        assert_eq!((glyph.width(), glyph.height()), (18, 18));
        assert_eq!(glyph.as_raw().len(), 18 * 18 * 4);
    }

    #[test]
    fn test_glyph_is_deterministic() {
        let a = slider_glyph("#ff0039", 18).unwrap();
        let b = slider_glyph("#ff0039", 18).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_glyph_center_is_fill_and_corner_is_clear() {
        let glyph = slider_glyph("#3fb618", 18).unwrap();

        let [r, g, b, a] = glyph.get_pixel(9, 9).unwrap();
        assert!(close(r, 0x3f) && close(g, 0xb6) && close(b, 0x18));
        assert!(a >= 254);

        let [_, _, _, corner_alpha] = glyph.get_pixel(0, 0).unwrap();
        assert!(corner_alpha < 32, "corner alpha {corner_alpha}");
    }

    #[test]
    fn test_glyph_edges_keep_fill_color() {
        for hex in ["#ffffff", "#f8f9fa", "#2780e3"] {
            let [fr, fg, fb] = Rgb::from_hex(hex).unwrap().to_rgb8();
            let glyph = slider_glyph(hex, 18).unwrap();
            for (x, y) in (0..18).flat_map(|x| (0..18).map(move |y| (x, y))) {
                let [r, g, b, a] = glyph.get_pixel(x, y).unwrap();
                if a > 16 {
                    assert!(
                        close(r, fr) && close(g, fg) && close(b, fb),
                        "{hex} at ({x},{y}) is {r},{g},{b},{a}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_glyph_differs_by_color() {
        let a = slider_glyph("#2780e3", 18).unwrap();
        let b = slider_glyph("#1f66b5", 18).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_swatch_is_uniform() {
        let swatch = solid_swatch("#f8f9fa", 8, 8).unwrap();
        assert_eq!((swatch.width(), swatch.height()), (8, 8));
        assert!(swatch
            .as_raw()
            .chunks(4)
            .all(|px| px == [0xf8, 0xf9, 0xfa, 0xff]));
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let err = slider_glyph("blue", 18).unwrap_err();
        assert!(matches!(
            err,
            ImageError::InvalidColorFormat(ColorError::InvalidFormat(ref s)) if s == "blue"
        ));
        assert!(matches!(
            solid_swatch("#12345", 8, 8),
            Err(ImageError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(slider_glyph("#ffffff", 0), Err(ImageError::ZeroSize)));
        assert!(matches!(solid_swatch("#ffffff", 8, 0), Err(ImageError::ZeroSize)));
    }

    #[test]
    fn test_png_encoding_has_signature() {
        let png = solid_swatch("#000000", 2, 2).unwrap().encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
