use std::fmt::{Display, Formatter};

/// ResizingType defines how imgproxy will resize the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizingType {
    /// Resizes the image while keeping aspect ratio to fit a given size.
    Fit,
    /// Resizes the image while keeping aspect ratio to fill a given size and crops projecting parts.
    Fill,
    /// Same as `Fill`, but if the resized image is smaller than the requested size,
    /// the result is cropped to keep the requested aspect ratio.
    FillDown,
    /// Resizes the image without keeping the aspect ratio.
    Force,
    /// `Fill` when source and result have the same orientation, `Fit` otherwise.
    Auto,
}

impl ResizingType {
    /// The value imgproxy expects in the URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizingType::Fit => "fit",
            ResizingType::Fill => "fill",
            ResizingType::FillDown => "fill-down",
            ResizingType::Force => "force",
            ResizingType::Auto => "auto",
        }
    }
}

impl Display for ResizingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
