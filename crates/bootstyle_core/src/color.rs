//! Color model
//!
//! Theme palettes are authored as hex strings. Everything derived from them
//! (hover and pressed shades, trough fills, dark-mode field backgrounds) goes
//! through [`brightness`], which scales the HSV value channel.
//!
//! Conversions are deliberately lossy: channels are stored as `f64` in
//! `[0, 1]` and quantized back to 8 bits by truncation, so a round trip is
//! exact only to within one step per channel.

use std::fmt;

use crate::error::{ColorError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// RGB
// ─────────────────────────────────────────────────────────────────────────────

/// RGB color with channels in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parse `#rgb` or `#rrggbb` (hex digits in either case)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidFormat(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                // Each nibble expands to a full byte: `f` -> `ff`
                let r = channel(&digits[0..1])? * 17;
                let g = channel(&digits[1..2])? * 17;
                let b = channel(&digits[2..3])? * 17;
                Ok(Self::from_rgb8(r, g, b))
            }
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Quantize to 8-bit channels, clamping and truncating
    pub fn to_rgb8(self) -> [u8; 3] {
        fn quantize(c: f64) -> u8 {
            // The epsilon absorbs noise from `n / 255.0 * 255.0`; `as` maps NaN to 0
            (c * 255.0 + 1e-9).clamp(0.0, 255.0) as u8
        }
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_hsv(self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let v = max;
        if max == min {
            return Hsv { h: 0.0, s: 0.0, v };
        }

        let range = max - min;
        let s = range / max;
        let rc = (max - self.r) / range;
        let gc = (max - self.g) / range;
        let bc = (max - self.b) / range;

        let h = if self.r == max {
            bc - gc
        } else if self.g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsv {
            h: (h / 6.0).rem_euclid(1.0),
            s,
            v,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HSV
// ─────────────────────────────────────────────────────────────────────────────

/// HSV color; hue is a fraction of a full turn, all channels in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        if s == 0.0 {
            return Rgb::new(v, v, v);
        }

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (sector as i64).rem_euclid(6) {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a hex color to `(r, g, b)` in `[0, 1]`
pub fn hex_to_rgb(hex: &str) -> Result<(f64, f64, f64)> {
    let rgb = Rgb::from_hex(hex)?;
    Ok((rgb.r, rgb.g, rgb.b))
}

/// Convert `[0, 1]` channels to `#rrggbb`
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Lighten (`delta > 0`) or darken (`delta < 0`) a hex color.
///
/// The HSV value channel is scaled by `1 + delta` and clamped to `[0, 1]`.
/// By convention hover states use `±0.1` and pressed states `±0.2`.
pub fn brightness(hex: &str, delta: f64) -> Result<String> {
    let hsv = Rgb::from_hex(hex)?.to_hsv();
    let v = ((1.0 + delta) * hsv.v).clamp(0.0, 1.0);
    Ok(Hsv { v, ..hsv }.to_rgb().to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(hex: &str) -> [u8; 3] {
        Rgb::from_hex(hex).unwrap().to_rgb8()
    }

    fn assert_close(a: &str, b: &str) {
        let (a8, b8) = (channels(a), channels(b));
        for i in 0..3 {
            let diff = (i16::from(a8[i]) - i16::from(b8[i])).abs();
            assert!(diff <= 1, "{a} vs {b}: channel {i} differs by {diff}");
        }
    }

    #[test]
    fn test_short_and_long_forms() {
        assert_eq!(hex_to_rgb("#fff").unwrap(), (1.0, 1.0, 1.0));
        assert_eq!(hex_to_rgb("#000000").unwrap(), (0.0, 0.0, 0.0));
        assert_eq!(channels("#abc"), channels("#aabbcc"));
        assert_eq!(channels("#FF0039"), [255, 0, 57]);
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in ["fff", "#ff", "#ffff", "#gggggg", "#12345", "#1234567", "", "#", "white"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(ColorError::InvalidFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_truncates_and_clamps() {
        assert_eq!(rgb_to_hex(1.0, 0.0, 0.5), "#ff007f");
        assert_eq!(rgb_to_hex(1.5, -0.2, 0.0), "#ff0000");
    }

    #[test]
    fn test_hsv_primaries() {
        let red = Rgb::new(1.0, 0.0, 0.0).to_hsv();
        assert_eq!((red.h, red.s, red.v), (0.0, 1.0, 1.0));

        let blue = Rgb::new(0.0, 0.0, 1.0).to_hsv();
        assert!((blue.h - 2.0 / 3.0).abs() < 1e-12);

        let gray = Rgb::new(0.5, 0.5, 0.5).to_hsv();
        assert_eq!((gray.h, gray.s, gray.v), (0.0, 0.0, 0.5));
    }

    #[test]
    fn test_brightness_identity() {
        for c in ["#2780e3", "#ff0039", "#ffffff", "#000000", "#3fb618"] {
            assert_close(&brightness(c, 0.0).unwrap(), c);
        }
    }

    #[test]
    fn test_brightness_darkens_value_channel() {
        // Pure red keeps hue and saturation, value drops by a fifth
        assert_eq!(brightness("#ff0000", -0.2).unwrap(), "#cc0000");
        assert_eq!(brightness("#ffffff", -0.1).unwrap(), "#e5e5e5");
    }

    #[test]
    fn test_brightness_clamps() {
        assert_eq!(brightness("#808080", 5.0).unwrap(), "#ffffff");
        assert_eq!(brightness("#808080", -1.0).unwrap(), "#000000");
        assert_eq!(brightness("#808080", -3.0).unwrap(), "#000000");
    }

    #[test]
    fn test_brightness_propagates_invalid_color() {
        assert!(matches!(
            brightness("#12", 0.1),
            Err(ColorError::InvalidFormat(_))
        ));
    }
}
