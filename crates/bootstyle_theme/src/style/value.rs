//! Style option values

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Value of a style option or option-database entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A `#rrggbb` color
    Color(String),
    /// Any other string: reliefs, anchors, font names, the empty focus color
    Str(String),
    Int(i64),
    /// Padding and other space-separated integer tuples
    Ints(SmallVec<[i64; 4]>),
    Bool(bool),
}

impl Value {
    pub fn color(hex: impl Into<String>) -> Self {
        Self::Color(hex.into())
    }

    /// The color, if this is a color value
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Color(s) | Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl<const N: usize> From<[i32; N]> for Value {
    fn from(values: [i32; N]) -> Self {
        Self::Ints(values.into_iter().map(i64::from).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(s) | Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Ints(values) => {
                for (i, n) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{n}")?;
                }
                Ok(())
            }
            Self::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_display() {
        assert_eq!(Value::from([10, 5]).to_string(), "10 5");
        assert_eq!(Value::from([0, 0, 15, 0]).to_string(), "0 0 15 0");
        assert_eq!(Value::from(-2).to_string(), "-2");
    }

    #[test]
    fn test_colors_are_distinct_from_strings() {
        assert_eq!(Value::color("#ffffff").as_color(), Some("#ffffff"));
        assert_eq!(Value::from("flat").as_color(), None);
        assert_eq!(Value::from("flat").as_str(), Some("flat"));
    }

    #[test]
    fn test_serializes_untagged() {
        let json = serde_json::to_string(&Value::from([10, 5])).unwrap();
        assert_eq!(json, "[10,5]");
        let json = serde_json::to_string(&Value::color("#ff0039")).unwrap();
        assert_eq!(json, "\"#ff0039\"");
    }
}
