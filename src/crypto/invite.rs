//! Invite codes and invite payloads
//!
//! Invite codes are short random strings a sender reads out or shows as a
//! QR code. They have no relationship to key material. Invite payloads carry
//! the connection details a receiver needs, sealed under a shared key.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::encryption::{decrypt, encrypt};
use crate::error::PeerlinkResult;

/// Number of characters in an invite code
pub const INVITE_CODE_LENGTH: usize = 8;

/// Alphabet for invite codes
pub const INVITE_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a generated password
pub const PASSWORD_LENGTH: usize = 16;

/// Alphabet for generated passwords
pub const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Draw `len` characters uniformly from `charset`
fn random_string(charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| charset[OsRng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Generate an 8-character invite code over `[A-Z0-9]`
pub fn generate_invite_code() -> String {
    random_string(INVITE_CODE_CHARSET, INVITE_CODE_LENGTH)
}

/// Generate a 16-character password with mixed case, digits and symbols
pub fn generate_password() -> String {
    random_string(PASSWORD_CHARSET, PASSWORD_LENGTH)
}

/// Connection details shared with a receiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteData {
    /// Port the sender is serving the file on
    pub port: u16,
    /// Base64 key the file was encrypted with
    pub encryption_key: String,
    /// Original file name
    pub filename: String,
    /// File size in bytes
    pub file_size: u64,
}

/// Serialize invite data and seal it into a base64 envelope
pub fn seal_invite(data: &InviteData, key: &str) -> PeerlinkResult<String> {
    let json = zeroize::Zeroizing::new(serde_json::to_vec(data)?);
    encrypt(&json, key)
}

/// Open a sealed invite and parse its contents
pub fn open_invite(envelope: &str, key: &str) -> PeerlinkResult<InviteData> {
    let json = zeroize::Zeroizing::new(decrypt(envelope, key)?);
    Ok(serde_json::from_slice(&json)?)
}
