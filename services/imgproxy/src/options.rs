//! Processing options carried in the URL path.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::{Background, Gravity, ResizingType, WatermarkOffset, WatermarkPosition};

/// Options is the set of processing options for a single URL.
///
/// Every option is stored under its short key (`rs`, `g`, `bg`, ...) with its
/// value already formatted. Setting a key twice keeps the last value. Keys
/// are sorted when the options are serialized, so the order mutators are
/// called in never changes the URL or its signature.
///
/// ```
/// use imgsign_imgproxy::{GravityType, Options, ResizingType};
///
/// let options = Options::new()
///     .resize(ResizingType::Fill, 300, 200, false, false)
///     .gravity(GravityType::Smart)
///     .quality(80);
/// assert_eq!(options.to_string(), "/g:sm/q:80/rs:fill:300:200:0:0/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    options: HashMap<String, String>,
}

impl Options {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize the image: `rs:{type}:{width}:{height}:{enlarge}:{extend}`.
    pub fn resize(
        self,
        resizing_type: ResizingType,
        width: u32,
        height: u32,
        enlarge: bool,
        extend: bool,
    ) -> Self {
        self.set_option(
            "rs",
            format!(
                "{resizing_type}:{width}:{height}:{}:{}",
                bool_as_number(enlarge),
                bool_as_number(extend)
            ),
        )
    }

    /// Set the size: `s:{width}:{height}:{enlarge}`.
    pub fn size(self, width: u32, height: u32, enlarge: bool) -> Self {
        self.set_option(
            "s",
            format!("{width}:{height}:{}", bool_as_number(enlarge)),
        )
    }

    /// Set only the resizing type: `rs:{type}`.
    ///
    /// This shares the `rs` key with [`Options::resize`], whichever is called last wins.
    pub fn resizing_type(self, resizing_type: ResizingType) -> Self {
        self.set_option("rs", resizing_type.as_str())
    }

    /// Width of the resulting image.
    ///
    /// When set to 0, imgproxy calculates it from the height and the source aspect ratio.
    pub fn width(self, width: u32) -> Self {
        self.set_option("w", width.to_string())
    }

    /// Height of the resulting image.
    ///
    /// When set to 0, imgproxy calculates it from the width and the source aspect ratio.
    pub fn height(self, height: u32) -> Self {
        self.set_option("h", height.to_string())
    }

    /// Output density of the image.
    ///
    /// Values that are not strictly positive leave the options unchanged.
    pub fn dpr(self, dpr: f32) -> Self {
        if dpr > 0.0 {
            return self.set_option("dpr", dpr.to_string());
        }

        self
    }

    /// Allow imgproxy to enlarge the image.
    pub fn enlarge(self, enlarge: bool) -> Self {
        self.set_option("el", bool_as_number(enlarge))
    }

    /// Gravity used when parts of the image need to be cut.
    pub fn gravity(self, gravity: impl Into<Gravity>) -> Self {
        let gravity = gravity.into();
        self.set_option("g", gravity.option_value())
    }

    /// Quality of the resulting image, as a percentage.
    pub fn quality(self, quality: u8) -> Self {
        self.set_option("q", quality.to_string())
    }

    /// Background color of the resulting image.
    pub fn background(self, background: impl Into<Background>) -> Self {
        self.set_option("bg", background.into().to_string())
    }

    /// Gaussian blur, `sigma` defines the size of the mask.
    pub fn blur(self, sigma: f32) -> Self {
        self.set_option("bl", sigma.to_string())
    }

    /// Sharpen filter, `sigma` defines the size of the mask.
    pub fn sharpen(self, sigma: f32) -> Self {
        self.set_option("sh", sigma.to_string())
    }

    /// Place a watermark: `wm:{opacity}:{position}[:{x}:{y}]:{scale}`.
    ///
    /// The offset fields are left out entirely when `offset` is `None`.
    pub fn watermark(
        self,
        opacity: f32,
        position: WatermarkPosition,
        offset: Option<WatermarkOffset>,
        scale: f32,
    ) -> Self {
        let value = match offset {
            Some(WatermarkOffset { x, y }) => format!("{opacity}:{position}:{x}:{y}:{scale}"),
            None => format!("{opacity}:{position}:{scale}"),
        };

        self.set_option("wm", value)
    }

    /// Presets to apply, in the given order.
    pub fn preset<I, S>(self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let value = presets
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(":");
        self.set_option("pr", value)
    }

    /// Cache buster, changing it bypasses CDN, proxy and browser caches.
    ///
    /// Prefer this over a query string since it is covered by the signature.
    pub fn cache_buster(self, buster: impl Into<String>) -> Self {
        self.set_option("cb", buster)
    }

    /// Resulting image format, e.g. `png` or `webp`.
    pub fn format(self, extension: impl Into<String>) -> Self {
        self.set_option("f", extension)
    }

    /// Crop the image before resizing: `c:{width}:{height}[:{gravity}]`.
    ///
    /// `gravity` accepts `None`, a [`Gravity`] or a [`GravityType`](crate::GravityType).
    pub fn crop(self, width: u32, height: u32, gravity: impl Into<Option<Gravity>>) -> Self {
        let mut value = format!("{width}:{height}");
        if let Some(gravity) = gravity.into() {
            value.push(':');
            value.push_str(&gravity.crop_value());
        }

        self.set_option("c", value)
    }

    /// Set a raw option, overwriting any previous value for `key`.
    pub fn set_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get the formatted value of an option.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Canonical serialization: `/` followed by `{key}:{value}/` for every
/// option in byte-wise ascending key order.
impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.options.keys().collect();
        keys.sort_unstable();

        f.write_str("/")?;
        for key in keys {
            write!(f, "{key}:{}/", self.options[key])?;
        }
        Ok(())
    }
}

fn bool_as_number(v: bool) -> &'static str {
    if v {
        "1"
    } else {
        "0"
    }
}
