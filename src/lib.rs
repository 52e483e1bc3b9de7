//! PeerLink - authenticated encryption for peer-to-peer transfers
//!
//! This library provides the primitives PeerLink peers use to protect what
//! they exchange: AES-256-GCM encryption of text and files under a shared
//! 256-bit key, a nonce-prefixed envelope carried as base64, and random
//! invite codes.
//!
//! # Architecture
//!
//! - `crypto`: keys, envelope codec, encryption, invite codes
//! - `error`: custom error types
//! - `config`: configuration and path management
//! - `logging`: tracing setup for the binary
//! - `cli`: command handlers for the `peerlink` binary
//!
//! # Example
//!
//! ```rust
//! use peerlink::crypto::{decrypt_text, encrypt_text, generate_key};
//!
//! let key = generate_key();
//! let envelope = encrypt_text("hello", &key)?;
//! assert_eq!(decrypt_text(&envelope, &key)?, "hello");
//! # Ok::<(), peerlink::PeerlinkError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;

pub use error::{PeerlinkError, PeerlinkResult};
