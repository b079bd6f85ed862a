use log::debug;

use super::constants::*;
use super::endpoint::Endpoint;
use super::options::Options;
use super::sign::sign;
use imgsign_core::hash::base64_url_encode;
use imgsign_core::Result;

impl Endpoint {
    /// Generate the URL for `locator` processed with `options`.
    ///
    /// ## Format
    ///
    /// ```text
    /// {base_url}{signature}/{key}:{value}/.../{locator}
    /// ```
    ///
    /// - `locator` is base64url encoded when `encode_path` is set, otherwise
    ///   it is inserted verbatim after `plain/`.
    /// - Options are sorted by key.
    /// - `signature` is `insecure` if both key and salt are empty, otherwise
    ///   the signature of everything after it, starting with `/`.
    ///
    /// ```
    /// use imgsign_imgproxy::{Config, Endpoint, Options};
    ///
    /// # fn main() -> imgsign_core::Result<()> {
    /// let endpoint = Endpoint::new(Config::new().with_base_url("http://localhost"))?;
    /// let url = endpoint.generate(Options::new().width(300), "my/image.jpg")?;
    /// assert_eq!(url, "http://localhost/insecure/w:300/plain/my/image.jpg");
    /// # Ok(())
    /// # }
    /// ```
    pub fn generate(&self, options: Options, locator: &str) -> Result<String> {
        let locator = if self.encode_path {
            base64_url_encode(locator.as_bytes())
        } else {
            format!("{PLAIN_PREFIX}{locator}")
        };

        let payload = format!("{options}{locator}");
        debug!("payload to sign: {payload}");

        if !self.is_signed() {
            return Ok(format!("{}{INSECURE_SIGNATURE}{payload}", self.base_url));
        }

        let signature = sign(&self.key, &self.salt, self.signature_size, &payload)?;
        Ok(format!("{}{signature}{payload}", self.base_url))
    }
}
