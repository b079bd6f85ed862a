use std::fmt::{Debug, Formatter};

use log::debug;

use super::config::Config;
use super::constants::*;
use imgsign_core::hash::hex_decode;
use imgsign_core::{Error, Result};

/// Endpoint is a validated imgproxy configuration.
///
/// It is immutable once built and can be shared between threads to
/// generate any number of URLs concurrently.
#[derive(Clone)]
pub struct Endpoint {
    pub(crate) base_url: String,
    pub(crate) key: Vec<u8>,
    pub(crate) salt: Vec<u8>,
    pub(crate) signature_size: usize,
    pub(crate) encode_path: bool,
}

impl Endpoint {
    /// Validate `config` and build an endpoint from it.
    ///
    /// - The base url always ends with exactly one `/`.
    /// - Fails with `InvalidSignatureSize` if the signature size is outside `[1, 32]`.
    /// - Fails with `InvalidHexEncoding` if key or salt is not valid hex.
    pub fn new(config: Config) -> Result<Self> {
        let signature_size = config.signature_size.unwrap_or(DEFAULT_SIGNATURE_SIZE);
        if signature_size == 0 || signature_size > MAX_SIGNATURE_SIZE {
            return Err(Error::invalid_signature_size(format!(
                "signature size must be between 1 and {MAX_SIGNATURE_SIZE}, got {signature_size}"
            )));
        }

        let key = hex_decode(config.key.as_deref().unwrap_or_default())
            .map_err(|e| Error::invalid_hex_encoding("key is not valid hex").with_source(e))?;
        let salt = hex_decode(config.salt.as_deref().unwrap_or_default())
            .map_err(|e| Error::invalid_hex_encoding("salt is not valid hex").with_source(e))?;

        let mut base_url = config
            .base_url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();
        base_url.push('/');

        let endpoint = Self {
            base_url,
            key,
            salt,
            signature_size,
            encode_path: config.encode_path.unwrap_or_default(),
        };
        debug!("imgproxy endpoint loaded from {config:?}: {endpoint:?}");

        Ok(endpoint)
    }

    /// Base url, always ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether generated URLs carry a signature.
    ///
    /// Only an empty key together with an empty salt disables signing.
    pub fn is_signed(&self) -> bool {
        !(self.key.is_empty() && self.salt.is_empty())
    }

    /// Number of digest bytes kept in the signature.
    pub fn signature_size(&self) -> usize {
        self.signature_size
    }

    /// Whether the source locator is base64 encoded.
    pub fn encode_path(&self) -> bool {
        self.encode_path
    }
}

impl Debug for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url)
            .field("signed", &self.is_signed())
            .field("signature_size", &self.signature_size)
            .field("encode_path", &self.encode_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgsign_core::ErrorKind;
    use test_case::test_case;

    fn config() -> Config {
        Config::new()
            .with_base_url("http://localhost")
            .with_key("6b6579")
            .with_salt("73616c74")
    }

    #[test_case(0, false; "zero")]
    #[test_case(1, true; "lower bound")]
    #[test_case(15, true; "common")]
    #[test_case(32, true; "upper bound")]
    #[test_case(33, false; "past digest")]
    fn test_signature_size(size: usize, ok: bool) {
        let result = Endpoint::new(config().with_signature_size(size));
        match result {
            Ok(endpoint) => {
                assert!(ok, "size {size} should be rejected");
                assert_eq!(endpoint.signature_size(), size);
            }
            Err(err) => {
                assert!(!ok, "size {size} should be accepted");
                assert_eq!(err.kind(), ErrorKind::InvalidSignatureSize);
            }
        }
    }

    #[test_case(config().with_key("6g6579"); "key with non hex char")]
    #[test_case(config().with_key("6b657"); "key with odd length")]
    #[test_case(config().with_salt("salt"); "salt not hex")]
    fn test_invalid_hex(cfg: Config) {
        let err = Endpoint::new(cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHexEncoding);
    }

    #[test_case("http://localhost", "http://localhost/"; "without slash")]
    #[test_case("http://localhost/", "http://localhost/"; "with slash")]
    #[test_case("https://img.example.com/proxy", "https://img.example.com/proxy/"; "with path")]
    #[test_case("http://localhost//", "http://localhost/"; "with repeated slashes")]
    #[test_case("http://localhost/proxy///", "http://localhost/proxy/"; "with path and repeated slashes")]
    #[test_case("", "/"; "empty")]
    fn test_base_url(input: &str, expected: &str) {
        let endpoint = Endpoint::new(config().with_base_url(input)).unwrap();
        assert_eq!(endpoint.base_url(), expected);
    }

    #[test]
    fn test_defaults() {
        let endpoint = Endpoint::new(Config::new()).unwrap();
        assert!(!endpoint.is_signed());
        assert!(!endpoint.encode_path());
        assert_eq!(endpoint.signature_size(), DEFAULT_SIGNATURE_SIZE);
        assert_eq!(endpoint.base_url(), "/");
    }

    #[test]
    fn test_is_signed() {
        assert!(Endpoint::new(config()).unwrap().is_signed());
        assert!(!Endpoint::new(config().with_key("").with_salt(""))
            .unwrap()
            .is_signed());
        // Only both empty means insecure.
        assert!(Endpoint::new(config().with_salt("")).unwrap().is_signed());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let endpoint = Endpoint::new(config()).unwrap();
        let output = format!("{endpoint:?}");
        assert!(output.contains("signed: true"));
        assert!(!output.contains("107, 101, 121"));
    }
}
