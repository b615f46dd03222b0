//! Color model errors

use thiserror::Error;

/// Errors raised by the color model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The value is not `#rgb` or `#rrggbb`
    #[error("invalid color format `{0}` (expected #rgb or #rrggbb)")]
    InvalidFormat(String),

    /// A palette key or variant name that does not exist
    #[error("unknown color key `{0}`")]
    UnknownKey(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
