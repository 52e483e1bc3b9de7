//! Symmetric key generation and parsing
//!
//! Keys are 32 random bytes for AES-256-GCM, carried between peers as
//! standard base64. The in-memory form zeroizes itself on drop.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{PeerlinkError, PeerlinkResult};

/// Size of an AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// A 256-bit symmetric key
#[derive(Clone, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; KEY_SIZE],
}

impl SecretKey {
    /// Draw a fresh key from the OS entropy source
    ///
    /// Panics if the OS cannot supply random bytes; there is no weaker
    /// fallback.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Wrap raw key bytes
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Parse the base64 transport form
    ///
    /// # Errors
    ///
    /// Returns `KeyFormat` if the string is not valid base64 or does not
    /// decode to exactly 32 bytes.
    pub fn from_base64(encoded: &str) -> PeerlinkResult<Self> {
        // The decoder's own error echoes the offending symbol, so it is not
        // forwarded.
        let decoded = Zeroizing::new(
            STANDARD
                .decode(encoded)
                .map_err(|_| PeerlinkError::key_format("not valid base64"))?,
        );

        if decoded.len() != KEY_SIZE {
            return Err(PeerlinkError::key_format(format!(
                "expected {} bytes, got {}",
                KEY_SIZE,
                decoded.len()
            )));
        }

        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    /// Encode as base64 for transport
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.bytes)
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

// Never print key material
impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// Generate a random key in its base64 transport form
pub fn generate_key() -> String {
    SecretKey::generate().to_base64()
}

/// Check whether a string is a usable transport-form key
pub fn is_valid_key(encoded: &str) -> bool {
    SecretKey::from_base64(encoded).is_ok()
}
