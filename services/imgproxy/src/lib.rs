//! Signed URL builder for imgproxy.
//!
//! An [`Endpoint`] is validated once from a [`Config`] and reused for every
//! URL. Each URL starts from a fresh [`Options`] set, populated through
//! chained mutators, then consumed by [`Endpoint::generate`].
//!
//! ```
//! use imgsign_imgproxy::{Config, Endpoint, GravityType, Options, ResizingType};
//!
//! # fn main() -> imgsign_core::Result<()> {
//! let endpoint = Endpoint::new(
//!     Config::new()
//!         .with_base_url("http://localhost")
//!         .with_key("6b6579")
//!         .with_salt("73616c74")
//!         .with_signature_size(15),
//! )?;
//!
//! let options = Options::new()
//!     .resize(ResizingType::Fit, 123, 456, true, false)
//!     .gravity(GravityType::Center);
//! let url = endpoint.generate(options, "my/image.jpg")?;
//! assert!(url.ends_with("/g:ce/rs:fit:123:456:1:0/plain/my/image.jpg"));
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod endpoint;
pub use endpoint::Endpoint;

mod options;
pub use options::Options;

mod background;
pub use background::Background;
mod gravity;
pub use gravity::{Gravity, GravityType};
mod resizing_type;
pub use resizing_type::ResizingType;
mod watermark;
pub use watermark::{WatermarkOffset, WatermarkPosition};

mod sign;
pub use sign::sign;

mod url;

mod constants;
pub use constants::{
    IMGPROXY_BASE_URL, IMGPROXY_ENCODE_PATH, IMGPROXY_KEY, IMGPROXY_SALT,
    IMGPROXY_SIGNATURE_SIZE,
};
