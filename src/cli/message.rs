//! Text message CLI commands

use clap::Subcommand;

use super::{read_input, resolve_key};
use crate::crypto::{decrypt_text, encrypt_text};
use crate::error::PeerlinkResult;

/// Text encryption commands
#[derive(Subcommand)]
pub enum MessageCommands {
    /// Encrypt a text message into a base64 envelope
    Encrypt {
        /// Message to encrypt (read from stdin if omitted)
        text: Option<String>,
        /// Base64 encryption key (prompted if omitted)
        #[arg(short, long, env = "PEERLINK_KEY", hide_env_values = true)]
        key: Option<String>,
    },
    /// Decrypt a base64 envelope back into text
    Decrypt {
        /// Envelope to decrypt (read from stdin if omitted)
        envelope: Option<String>,
        /// Base64 encryption key (prompted if omitted)
        #[arg(short, long, env = "PEERLINK_KEY", hide_env_values = true)]
        key: Option<String>,
    },
}

/// Handle text encryption commands
pub fn handle_message_command(cmd: MessageCommands) -> PeerlinkResult<()> {
    match cmd {
        MessageCommands::Encrypt { text, key } => {
            let key = resolve_key(key)?;
            let text = zeroize::Zeroizing::new(read_input(text)?);
            println!("{}", encrypt_text(&text, &key)?);
        }
        MessageCommands::Decrypt { envelope, key } => {
            let key = resolve_key(key)?;
            let envelope = read_input(envelope)?;
            let text = zeroize::Zeroizing::new(decrypt_text(envelope.trim(), &key)?);
            println!("{}", text.as_str());
        }
    }

    Ok(())
}
