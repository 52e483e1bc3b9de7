//! Envelope codec
//!
//! An envelope is `nonce || ciphertext || tag` as one byte string, sent
//! between peers as standard base64. This module only frames bytes;
//! authenticity is checked by the cipher in [`super::encryption`].

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{PeerlinkError, PeerlinkResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Smallest possible envelope: nonce and tag around an empty ciphertext
pub const MIN_ENVELOPE_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// Concatenate a nonce and a ciphertext-with-tag into an envelope
pub fn pack(nonce: &[u8; NONCE_SIZE], body: &[u8]) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(NONCE_SIZE + body.len());
    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(body);
    envelope
}

/// Split an envelope into its nonce and ciphertext-with-tag
///
/// # Errors
///
/// Returns `EnvelopeFormat` if the envelope is shorter than
/// [`MIN_ENVELOPE_SIZE`].
pub fn unpack(envelope: &[u8]) -> PeerlinkResult<(&[u8; NONCE_SIZE], &[u8])> {
    if envelope.len() < MIN_ENVELOPE_SIZE {
        return Err(PeerlinkError::envelope_format(format!(
            "expected at least {} bytes, got {}",
            MIN_ENVELOPE_SIZE,
            envelope.len()
        )));
    }

    let (nonce, body) = envelope.split_at(NONCE_SIZE);
    let nonce = <&[u8; NONCE_SIZE]>::try_from(nonce)
        .map_err(|_| PeerlinkError::envelope_format("nonce is not 12 bytes"))?;
    Ok((nonce, body))
}

/// Encode raw envelope bytes for transport
pub fn encode(envelope: &[u8]) -> String {
    STANDARD.encode(envelope)
}

/// Decode the transport form back into raw envelope bytes
///
/// Only the base64 layer is checked here; use [`unpack`] for framing.
pub fn decode(encoded: &str) -> PeerlinkResult<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| PeerlinkError::envelope_format(format!("invalid base64: {}", e)))
}
