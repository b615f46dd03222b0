//! Bootstyle Image
//!
//! Bitmap synthesis for widgets whose native elements cannot be recolored.
//!
//! # Features
//!
//! - Anti-aliased circular slider glyphs, drawn on a large canvas and
//!   downsampled with a Lanczos filter
//! - Flat color swatches used as slider troughs
//! - PNG encoding for hosts that load native images from encoded data
//!
//! Every function here is pure: the same color and size always produce the
//! same pixels.
//!
//! # Example
//!
//! ```ignore
//! use bootstyle_image::{slider_glyph, solid_swatch};
//!
//! let thumb = slider_glyph("#2780e3", 18)?;
//! let trough = solid_swatch("#f8f9fa", 8, 8)?;
//! assert_eq!((thumb.width(), thumb.height()), (18, 18));
//! ```

mod bitmap;
mod error;
mod glyph;

pub use bitmap::Bitmap;
pub use error::{ImageError, Result};
pub use glyph::{slider_glyph, solid_swatch, CANVAS_SIZE};
