//! Owned RGBA bitmaps

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;

/// An RGBA8 bitmap produced by the synthesis functions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pixels: RgbaImage,
}

impl Bitmap {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get a pixel at (x, y) as RGBA
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw pixel data, row-major, 4 bytes per pixel
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Encode as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}
