use std::fmt::{Display, Formatter};

/// WatermarkPosition defines where the watermark is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WatermarkPosition {
    /// Center, the default.
    #[default]
    Center,
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
    /// Replicate the watermark to fill the whole image.
    Replicate,
}

impl WatermarkPosition {
    /// The code imgproxy expects in the URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            WatermarkPosition::Center => "ce",
            WatermarkPosition::North => "no",
            WatermarkPosition::South => "so",
            WatermarkPosition::East => "ea",
            WatermarkPosition::West => "we",
            WatermarkPosition::NorthEast => "noea",
            WatermarkPosition::NorthWest => "nowe",
            WatermarkPosition::SouthEast => "soea",
            WatermarkPosition::SouthWest => "sowe",
            WatermarkPosition::Replicate => "re",
        }
    }
}

impl Display for WatermarkPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset of the watermark from its position, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WatermarkOffset {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl WatermarkOffset {
    /// Create a new offset.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
