//! Cryptographic functions for PeerLink
//!
//! Provides AES-256-GCM authenticated encryption for messages and files
//! sent between peers, the nonce-prefixed envelope they travel in, and
//! random invite codes.

pub mod encryption;
pub mod envelope;
pub mod invite;
pub mod key;

pub use encryption::{
    decrypt, decrypt_file, decrypt_text, encrypt, encrypt_file, encrypt_text, open, seal,
};
pub use envelope::{MIN_ENVELOPE_SIZE, NONCE_SIZE, TAG_SIZE};
pub use invite::{
    generate_invite_code, generate_password, open_invite, seal_invite, InviteData,
};
pub use key::{generate_key, is_valid_key, SecretKey, KEY_SIZE};
