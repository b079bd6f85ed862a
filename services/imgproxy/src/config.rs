use std::fmt::{Debug, Formatter};

use super::constants::*;
use imgsign_core::{utils::Redact, Context, Error, Result};

/// Config carries all the configuration for an imgproxy endpoint.
///
/// Values are kept as provided; they are only validated when an
/// [`Endpoint`](crate::Endpoint) is built from them.
#[derive(Clone, Default)]
pub struct Config {
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_BASE_URL`]
    pub base_url: Option<String>,
    /// Hex encoded signing key, `key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_KEY`]
    pub key: Option<String>,
    /// Hex encoded signing salt, `salt` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_SALT`]
    pub salt: Option<String>,
    /// Number of digest bytes kept in the signature, `signature_size` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_SIGNATURE_SIZE`]
    pub signature_size: Option<usize>,
    /// Encode the source locator with base64 instead of passing it as `plain/`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_ENCODE_PATH`]
    pub encode_path: Option<bool>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set hex encoded key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set hex encoded salt
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Set signature_size
    pub fn with_signature_size(mut self, signature_size: usize) -> Self {
        self.signature_size = Some(signature_size);
        self
    }

    /// Set encode_path
    pub fn with_encode_path(mut self, encode_path: bool) -> Self {
        self.encode_path = Some(encode_path);
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are left untouched.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(IMGPROXY_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IMGPROXY_KEY) {
            self.key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IMGPROXY_SALT) {
            self.salt.get_or_insert(v);
        }
        if self.signature_size.is_none() {
            if let Some(v) = ctx.env_var(IMGPROXY_SIGNATURE_SIZE) {
                let size = v.trim().parse::<usize>().map_err(|e| {
                    Error::config_invalid(format!(
                        "{IMGPROXY_SIGNATURE_SIZE} must be an unsigned integer, got {v:?}"
                    ))
                    .with_source(e)
                })?;
                self.signature_size = Some(size);
            }
        }
        if self.encode_path.is_none() {
            if let Some(v) = ctx.env_var(IMGPROXY_ENCODE_PATH) {
                self.encode_path = Some(parse_bool(IMGPROXY_ENCODE_PATH, &v)?);
            }
        }

        Ok(self)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(Error::config_invalid(format!(
            "{name} must be one of true, false, 1 or 0, got {value:?}"
        ))),
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("key", &Redact::from(&self.key))
            .field("salt", &Redact::from(&self.salt))
            .field("signature_size", &self.signature_size)
            .field("encode_path", &self.encode_path)
            .finish()
    }
}
