//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption for messages and files exchanged
//! between peers. Each encryption draws a fresh random nonce, which travels
//! at the front of the envelope. No associated data is bound.
//!
//! All entry points funnel into one byte-oriented seal/open pair; the text
//! and file variants only differ in how they convert at the boundary.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, trace};

use super::envelope::{self, NONCE_SIZE};
use super::key::SecretKey;
use crate::error::{PeerlinkError, PeerlinkResult};

/// Encrypt under an explicit nonce, returning the raw envelope
pub(crate) fn seal_with_nonce(
    key: &SecretKey,
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
) -> PeerlinkResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| PeerlinkError::Encryption("payload too large for AES-GCM".to_string()))?;

    Ok(envelope::pack(nonce, &ciphertext))
}

/// Encrypt under a freshly drawn nonce, returning the raw envelope
pub fn seal(key: &SecretKey, plaintext: &[u8]) -> PeerlinkResult<Vec<u8>> {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);

    let sealed = seal_with_nonce(key, &nonce, plaintext)?;
    debug!(
        plaintext_len = plaintext.len(),
        envelope_len = sealed.len(),
        "sealed payload"
    );
    Ok(sealed)
}

/// Verify and decrypt a raw envelope
///
/// Nothing from the ciphertext is returned unless the tag verifies.
pub fn open(key: &SecretKey, raw: &[u8]) -> PeerlinkResult<Vec<u8>> {
    let (nonce, body) = envelope::unpack(raw)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    match cipher.decrypt(Nonce::from_slice(nonce), body) {
        Ok(plaintext) => {
            debug!(
                envelope_len = raw.len(),
                plaintext_len = plaintext.len(),
                "opened payload"
            );
            Ok(plaintext)
        }
        Err(_) => {
            trace!(envelope_len = raw.len(), "authentication tag rejected");
            Err(PeerlinkError::AuthenticationFailure)
        }
    }
}

/// Encrypt bytes, returning the base64 envelope
///
/// # Errors
///
/// Returns `KeyFormat` if `key` is not a valid base64 256-bit key.
pub fn encrypt(plaintext: &[u8], key: &str) -> PeerlinkResult<String> {
    let key = SecretKey::from_base64(key)?;
    Ok(envelope::encode(&seal(&key, plaintext)?))
}

/// Decrypt a base64 envelope back into bytes
///
/// # Errors
///
/// - `KeyFormat` if `key` is not a valid base64 256-bit key
/// - `EnvelopeFormat` if the envelope is not base64 or is too short
/// - `AuthenticationFailure` if the tag does not verify
pub fn decrypt(envelope: &str, key: &str) -> PeerlinkResult<Vec<u8>> {
    let key = SecretKey::from_base64(key)?;
    let raw = envelope::decode(envelope)?;
    open(&key, &raw)
}

/// Encrypt a string
pub fn encrypt_text(plaintext: &str, key: &str) -> PeerlinkResult<String> {
    encrypt(plaintext.as_bytes(), key)
}

/// Decrypt to a string
pub fn decrypt_text(envelope: &str, key: &str) -> PeerlinkResult<String> {
    let plaintext = decrypt(envelope, key)?;
    String::from_utf8(plaintext).map_err(|_| PeerlinkError::InvalidText)
}

/// Encrypt file contents, returning the raw (unencoded) envelope
pub fn encrypt_file(contents: &[u8], key: &str) -> PeerlinkResult<Vec<u8>> {
    let key = SecretKey::from_base64(key)?;
    seal(&key, contents)
}

/// Decrypt a raw envelope produced by [`encrypt_file`]
pub fn decrypt_file(raw: &[u8], key: &str) -> PeerlinkResult<Vec<u8>> {
    let key = SecretKey::from_base64(key)?;
    open(&key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::envelope::{MIN_ENVELOPE_SIZE, TAG_SIZE};
    use crate::crypto::key::generate_key;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn zero_key() -> String {
        STANDARD.encode([0u8; 32])
    }

    #[test]
    fn test_encrypt_decrypt() {
        let key = generate_key();
        let plaintext = b"Hello, World!";

        let encrypted = encrypt(plaintext, &key).unwrap();
        let decrypted = decrypt(&encrypted, &key).unwrap();

        assert_eq!(plaintext, decrypted.as_slice());
    }

    #[test]
    fn test_hello_with_zero_key() {
        let key = zero_key();

        let encrypted = encrypt_text("hello", &key).unwrap();
        let raw = STANDARD.decode(&encrypted).unwrap();
        assert_eq!(raw.len(), NONCE_SIZE + 5 + TAG_SIZE);
        assert_eq!(raw.len(), 33);

        assert_eq!(decrypt_text(&encrypted, &key).unwrap(), "hello");
    }

    #[test]
    fn test_empty_plaintext() {
        let key = generate_key();

        let encrypted = encrypt(b"", &key).unwrap();
        let raw = STANDARD.decode(&encrypted).unwrap();
        assert_eq!(raw.len(), MIN_ENVELOPE_SIZE);

        assert!(decrypt(&encrypted, &key).unwrap().is_empty());
    }

    #[test]
    fn test_large_plaintext() {
        let key = generate_key();
        let plaintext: Vec<u8> = (0..100_000).map(|i| (i % 251) as u8).collect();

        let encrypted = encrypt_file(&plaintext, &key).unwrap();
        assert_eq!(encrypted.len(), plaintext.len() + MIN_ENVELOPE_SIZE);
        assert_eq!(decrypt_file(&encrypted, &key).unwrap(), plaintext);
    }

    #[test]
    fn test_text_round_trips_non_ascii() {
        let key = generate_key();
        let text = "grüße, мир, 世界 🚀";

        let encrypted = encrypt_text(text, &key).unwrap();
        assert_eq!(decrypt_text(&encrypted, &key).unwrap(), text);
    }

    #[test]
    fn test_malformed_envelope_is_format_error() {
        let err = decrypt("!!!", &generate_key()).unwrap_err();
        assert!(matches!(err, PeerlinkError::EnvelopeFormat(_)));
        assert!(!err.is_authentication_failure());
    }

    #[test]
    fn test_nonces_are_fresh() {
        let key = SecretKey::generate();
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            let raw = seal(&key, b"same message").unwrap();
            let (nonce, _) = envelope::unpack(&raw).unwrap();
            assert!(seen.insert(*nonce), "nonce reused");
        }
    }

    #[test]
    fn test_every_bit_flip_is_detected() {
        let key = generate_key();
        let encrypted = encrypt_text("hello", &key).unwrap();
        let raw = STANDARD.decode(&encrypted).unwrap();

        for byte in 0..raw.len() {
            for bit in 0..8 {
                let mut tampered = raw.clone();
                tampered[byte] ^= 1 << bit;

                let err = decrypt(&STANDARD.encode(&tampered), &key).unwrap_err();
                assert!(
                    err.is_authentication_failure(),
                    "flip of byte {} bit {} was not rejected",
                    byte,
                    bit
                );
            }
        }
    }

    #[test]
    fn test_truncated_envelopes_are_format_errors() {
        let keys = [zero_key(), generate_key(), generate_key()];
        let raw = STANDARD.decode(encrypt(b"", &keys[0]).unwrap()).unwrap();

        for key in &keys {
            for len in 0..MIN_ENVELOPE_SIZE {
                let err = decrypt(&STANDARD.encode(&raw[..len]), key).unwrap_err();
                assert!(matches!(err, PeerlinkError::EnvelopeFormat(_)));

                let err = decrypt_file(&raw[..len], key).unwrap_err();
                assert!(matches!(err, PeerlinkError::EnvelopeFormat(_)));
            }
        }
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = generate_key();
        let key2 = generate_key();

        let encrypted = encrypt(b"Hello, World!", &key1).unwrap();
        let err = decrypt(&encrypted, &key2).unwrap_err();
        assert!(err.is_authentication_failure());

        let raw = encrypt_file(b"file contents", &key1).unwrap();
        let err = decrypt_file(&raw, &key2).unwrap_err();
        assert!(err.is_authentication_failure());
    }

    #[test]
    fn test_bad_key_rejected_before_envelope() {
        let err = encrypt(b"data", "short").unwrap_err();
        assert!(matches!(err, PeerlinkError::KeyFormat(_)));

        let err = decrypt("!!!", &STANDARD.encode([0u8; 31])).unwrap_err();
        assert!(matches!(err, PeerlinkError::KeyFormat(_)));

        let err = decrypt_file(&[0u8; 40], "!!!").unwrap_err();
        assert!(matches!(err, PeerlinkError::KeyFormat(_)));
    }

    #[test]
    fn test_invalid_utf8_plaintext() {
        let key = generate_key();
        let encrypted = encrypt(&[0xFF, 0xFE, 0x00], &key).unwrap();

        let err = decrypt_text(&encrypted, &key).unwrap_err();
        assert!(matches!(err, PeerlinkError::InvalidText));
    }

    #[test]
    fn test_text_and_bytes_paths_agree() {
        let key = SecretKey::from_bytes([5u8; 32]);
        let nonce = [11u8; NONCE_SIZE];
        let text = "same bytes either way";

        let from_text = seal_with_nonce(&key, &nonce, text.as_bytes()).unwrap();
        let from_bytes = seal_with_nonce(&key, &nonce, &text.as_bytes().to_vec()).unwrap();
        assert_eq!(from_text, from_bytes);

        // Text, string-envelope and file entry points all open the same bytes
        let encoded = envelope::encode(&from_text);
        let key_str = key.to_base64();
        assert_eq!(decrypt_text(&encoded, &key_str).unwrap(), text);
        assert_eq!(decrypt_file(&from_bytes, &key_str).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_different_nonces() {
        let key = generate_key();

        let encrypted1 = encrypt(b"Hello, World!", &key).unwrap();
        let encrypted2 = encrypt(b"Hello, World!", &key).unwrap();

        assert_ne!(encrypted1, encrypted2);
    }

    #[test]
    fn test_concurrent_encryption() {
        let key = generate_key();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let key = &key;
                    s.spawn(move || {
                        let message = format!("message from thread {}", i);
                        let encrypted = encrypt_text(&message, key).unwrap();
                        assert_eq!(decrypt_text(&encrypted, key).unwrap(), message);
                        encrypted
                    })
                })
                .collect();

            let envelopes: HashSet<String> =
                handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(envelopes.len(), 8);
        });
    }

    proptest! {
        #[test]
        fn round_trip_arbitrary_bytes(
            plaintext in prop::collection::vec(any::<u8>(), 0..2048),
            key_bytes in prop::array::uniform32(any::<u8>()),
        ) {
            let key = STANDARD.encode(key_bytes);
            let encrypted = encrypt(&plaintext, &key).unwrap();
            let raw = STANDARD.decode(&encrypted).unwrap();

            prop_assert_eq!(raw.len(), plaintext.len() + MIN_ENVELOPE_SIZE);
            prop_assert_eq!(decrypt(&encrypted, &key).unwrap(), plaintext);
        }

        #[test]
        fn round_trip_arbitrary_text(text in ".{0,200}") {
            let key = generate_key();
            let encrypted = encrypt_text(&text, &key).unwrap();
            prop_assert_eq!(decrypt_text(&encrypted, &key).unwrap(), text);
        }
    }
}
