use std::fmt;
use thiserror::Error;

/// The error type for imgsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Key or salt is not a valid hex string
    InvalidHexEncoding,

    /// Signature truncation length is outside the digest range
    InvalidSignatureSize,

    /// Configuration error (unparsable values loaded from env)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was raised while validating a configuration.
    ///
    /// All of these are fixed by correcting the input, never by retrying.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidHexEncoding
                | ErrorKind::InvalidSignatureSize
                | ErrorKind::ConfigInvalid
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an invalid hex encoding error
    pub fn invalid_hex_encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHexEncoding, message)
    }

    /// Create an invalid signature size error
    pub fn invalid_signature_size(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSignatureSize, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidHexEncoding => write!(f, "invalid hex encoding"),
            ErrorKind::InvalidSignatureSize => write!(f, "invalid signature size"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::invalid_hex_encoding(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
