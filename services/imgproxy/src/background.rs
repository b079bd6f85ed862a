use std::fmt::{Display, Formatter};

/// Background fills the resulting image background with the specified color.
///
/// Useful when converting an image with an alpha channel to JPEG.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Background {
    /// A hex-coded color, passed through unchanged.
    Hex(String),
    /// Red, green and blue channel values.
    Rgb(u8, u8, u8),
}

impl Background {
    /// Build a hex-coded background.
    pub fn hex(color: impl Into<String>) -> Self {
        Background::Hex(color.into())
    }
}

impl From<&str> for Background {
    fn from(value: &str) -> Self {
        Background::Hex(value.to_string())
    }
}

impl From<String> for Background {
    fn from(value: String) -> Self {
        Background::Hex(value)
    }
}

impl From<(u8, u8, u8)> for Background {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Background::Rgb(r, g, b)
    }
}

impl Display for Background {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Background::Hex(color) => f.write_str(color),
            Background::Rgb(r, g, b) => write!(f, "{r}:{g}:{b}"),
        }
    }
}
