//! Error types for PeerLink
//!
//! One `thiserror` enum covers both the cryptographic failures a caller
//! must distinguish (bad key, malformed envelope, failed authentication)
//! and the ambient failures of the config layer and CLI.
//!
//! Messages never carry key, plaintext or tag bytes.

use thiserror::Error;

/// The main error type for PeerLink operations
#[derive(Error, Debug)]
pub enum PeerlinkError {
    /// The key string is not valid base64 or does not decode to 32 bytes
    #[error("Invalid key: {0}")]
    KeyFormat(String),

    /// The envelope is not valid base64 or is shorter than nonce + tag
    #[error("Malformed envelope: {0}")]
    EnvelopeFormat(String),

    /// The envelope is well-formed but the tag does not verify under the key
    #[error("Authentication failed: wrong key or tampered data")]
    AuthenticationFailure,

    /// The cipher refused to encrypt (payload beyond AES-GCM limits)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Decryption succeeded but the plaintext is not UTF-8
    #[error("Decrypted payload is not valid UTF-8 text")]
    InvalidText,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl PeerlinkError {
    /// Create a key format error with a fixed reason
    pub(crate) fn key_format(reason: impl Into<String>) -> Self {
        Self::KeyFormat(reason.into())
    }

    /// Create an envelope format error
    pub(crate) fn envelope_format(reason: impl Into<String>) -> Self {
        Self::EnvelopeFormat(reason.into())
    }

    /// Check if this is an authentication failure (tamper or wrong key)
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure)
    }

    /// Check if this is a key or envelope format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::KeyFormat(_) | Self::EnvelopeFormat(_))
    }
}

impl From<std::io::Error> for PeerlinkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PeerlinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for PeerLink operations
pub type PeerlinkResult<T> = Result<T, PeerlinkError>;
