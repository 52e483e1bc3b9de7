//! Invite CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::{read_input, resolve_key};
use crate::crypto::{generate_invite_code, generate_password, open_invite, seal_invite, InviteData};
use crate::error::{PeerlinkError, PeerlinkResult};

/// Invite management commands
#[derive(Subcommand)]
pub enum InviteCommands {
    /// Generate a random 8-character invite code
    Code,

    /// Generate a random 16-character password
    Password,

    /// Seal connection details for a file into an envelope
    Seal {
        /// Port the file is served on
        #[arg(short, long)]
        port: u16,
        /// File being shared (name and size are read from it)
        #[arg(short, long)]
        file: PathBuf,
        /// Key the shared file was encrypted with
        #[arg(long, env = "PEERLINK_FILE_KEY", hide_env_values = true)]
        file_key: String,
        /// Base64 key used to seal the invite (prompted if omitted)
        #[arg(short, long, env = "PEERLINK_KEY", hide_env_values = true)]
        key: Option<String>,
    },

    /// Open a sealed invite and show its connection details
    Open {
        /// Sealed invite (read from stdin if omitted)
        envelope: Option<String>,
        /// Base64 key used to seal the invite (prompted if omitted)
        #[arg(short, long, env = "PEERLINK_KEY", hide_env_values = true)]
        key: Option<String>,
    },
}

/// Handle invite commands
pub fn handle_invite_command(cmd: InviteCommands) -> PeerlinkResult<()> {
    match cmd {
        InviteCommands::Code => println!("{}", generate_invite_code()),
        InviteCommands::Password => println!("{}", generate_password()),
        InviteCommands::Seal {
            port,
            file,
            file_key,
            key,
        } => {
            let key = resolve_key(key)?;
            let metadata = std::fs::metadata(&file).map_err(|e| {
                PeerlinkError::Io(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let filename = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| PeerlinkError::Io(format!("Not a file: {}", file.display())))?;

            let invite = InviteData {
                port,
                encryption_key: file_key.trim().to_string(),
                filename,
                file_size: metadata.len(),
            };
            println!("{}", seal_invite(&invite, &key)?);
        }
        InviteCommands::Open { envelope, key } => {
            let key = resolve_key(key)?;
            let envelope = read_input(envelope)?;
            let invite = open_invite(envelope.trim(), &key)?;

            println!("Port:     {}", invite.port);
            println!("Filename: {}", invite.filename);
            println!("Size:     {} bytes", invite.file_size);
            println!("File key: {}", invite.encryption_key);
        }
    }

    Ok(())
}
