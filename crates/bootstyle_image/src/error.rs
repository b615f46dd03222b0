//! Image synthesis errors

use bootstyle_core::ColorError;
use thiserror::Error;

/// Errors raised while synthesizing or encoding a bitmap
#[derive(Error, Debug)]
pub enum ImageError {
    /// The fill color could not be parsed
    #[error(transparent)]
    InvalidColorFormat(#[from] ColorError),

    /// A requested width, height or diameter was zero
    #[error("image dimensions must be non-zero")]
    ZeroSize,

    /// PNG encoding failed
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for image synthesis
pub type Result<T> = std::result::Result<T, ImageError>;
