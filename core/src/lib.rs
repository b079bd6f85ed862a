//! Core components for building signed image-processing URLs.
//!
//! This crate provides the foundational types shared by the imgsign services.
//!
//! ## Overview
//!
//! - **Error**: a single [`Error`] type tagged with an [`ErrorKind`]
//! - **Context**: a container for the [`Env`] implementation configs are loaded from
//! - **Hash**: HMAC-SHA256, base64url and hex helpers in [`hash`]
//!
//! ## Example
//!
//! ```
//! use imgsign_core::hash::{base64_url_encode, hex_decode, salted_hmac_sha256};
//!
//! # fn main() -> imgsign_core::Result<()> {
//! let key = hex_decode("6b6579")?;
//! let salt = hex_decode("73616c74")?;
//! let digest = salted_hmac_sha256(&key, &salt, b"/plain/my/image.jpg")?;
//! let signature = base64_url_encode(&digest[..15]);
//! assert_eq!(signature, "s-cFqOcqN4HMtEZQwoyp");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing and encoding utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
