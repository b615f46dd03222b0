//! Bootstyle Core
//!
//! Foundational types shared by every Bootstyle crate:
//!
//! - **Color model**: hex parsing, HSV conversion and the `brightness`
//!   derivation used for every hover/pressed shade
//! - **Palettes**: the thirteen named colors of a theme, six of which are
//!   semantic [`Variant`]s
//! - **Theme definitions**: the immutable record a theme catalog hands to the
//!   style compiler
//!
//! # Example
//!
//! ```rust
//! use bootstyle_core::{brightness, hex_to_rgb, Palette, Variant};
//!
//! assert_eq!(hex_to_rgb("#fff").unwrap(), (1.0, 1.0, 1.0));
//!
//! let palette = Palette::default();
//! let pressed = brightness(palette.variant(Variant::Danger), -0.2).unwrap();
//! assert!(pressed.starts_with('#'));
//! ```

pub mod color;
pub mod definition;
pub mod error;
pub mod palette;

pub use color::{brightness, hex_to_rgb, rgb_to_hex, Hsv, Rgb};
pub use definition::{ThemeDefinition, ThemeKind};
pub use error::{ColorError, Result};
pub use palette::{ColorKey, Palette, Variant};
