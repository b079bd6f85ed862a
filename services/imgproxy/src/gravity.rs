use std::fmt::{Display, Formatter};

/// GravityType is the directional part of a gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GravityType {
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
    /// The most "interesting" section of the image is used as the center.
    Smart,
}

impl GravityType {
    /// The code imgproxy expects in the URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            GravityType::Center => "ce",
            GravityType::North => "no",
            GravityType::South => "so",
            GravityType::East => "ea",
            GravityType::West => "we",
            GravityType::NorthEast => "noea",
            GravityType::NorthWest => "nowe",
            GravityType::SouthEast => "soea",
            GravityType::SouthWest => "sowe",
            GravityType::Smart => "sm",
        }
    }
}

impl Display for GravityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gravity guides imgproxy when it needs to cut some parts of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gravity {
    /// A plain direction, rendered as its code.
    Direction(GravityType),
    /// A direction shifted by an offset in pixels.
    Offset {
        /// Direction the offset is applied to.
        gravity: GravityType,
        /// Horizontal offset.
        x_offset: i32,
        /// Vertical offset.
        y_offset: i32,
    },
    /// An absolute focus point, in the caller's unit convention.
    FocusPoint {
        /// Horizontal coordinate.
        x: i64,
        /// Vertical coordinate.
        y: i64,
    },
}

impl Gravity {
    /// Value of the `g` option.
    pub fn option_value(&self) -> String {
        self.to_string()
    }

    /// Compact form appended to the `c` option.
    ///
    /// imgproxy parses the crop gravity with the same grammar as `g`.
    pub fn crop_value(&self) -> String {
        self.to_string()
    }
}

impl From<GravityType> for Gravity {
    fn from(value: GravityType) -> Self {
        Gravity::Direction(value)
    }
}

impl From<GravityType> for Option<Gravity> {
    fn from(value: GravityType) -> Self {
        Some(Gravity::Direction(value))
    }
}

impl Display for Gravity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Gravity::Direction(g) => write!(f, "{g}"),
            Gravity::Offset {
                gravity,
                x_offset,
                y_offset,
            } => write!(f, "{gravity}:{x_offset}:{y_offset}"),
            Gravity::FocusPoint { x, y } => write!(f, "fp:{x}:{y}"),
        }
    }
}
