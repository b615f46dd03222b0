//! Theme error types

use bootstyle_core::ColorError;
use bootstyle_image::ImageError;
use thiserror::Error;

/// Errors raised while compiling, registering or activating themes
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A palette entry or derived color is not `#rgb`/`#rrggbb`
    #[error(transparent)]
    InvalidColorFormat(#[from] ColorError),

    /// Activation requested a name that was never registered
    #[error("{name} is not a valid theme name. Please try one of the following: {}", known.join(", "))]
    UnknownTheme { name: String, known: Vec<String> },

    /// Image synthesis failed for a reason other than a bad color
    #[error("Image synthesis failed: {0}")]
    Image(ImageError),

    /// Compiler configuration could not be parsed
    #[error("Invalid compiler configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<ImageError> for ThemeError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::InvalidColorFormat(color) => Self::InvalidColorFormat(color),
            other => Self::Image(other),
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_errors_fold_into_color_errors() {
        let err = ThemeError::from(ImageError::InvalidColorFormat(ColorError::InvalidFormat(
            "blue".into(),
        )));
        assert!(matches!(err, ThemeError::InvalidColorFormat(_)));
        assert!(matches!(
            ThemeError::from(ImageError::ZeroSize),
            ThemeError::Image(ImageError::ZeroSize)
        ));
    }

    #[test]
    fn test_unknown_theme_lists_names() {
        let err = ThemeError::UnknownTheme {
            name: "solar".into(),
            known: vec!["cosmo".into(), "darkly".into()],
        };
        assert_eq!(
            err.to_string(),
            "solar is not a valid theme name. Please try one of the following: cosmo, darkly"
        );
    }
}
