//! File CLI commands
//!
//! Encrypted files hold the raw envelope by default; with `--armor` (or
//! `armor_files` in settings) they hold the base64 envelope instead.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use tracing::info;

use super::resolve_key;
use crate::config::Settings;
use crate::crypto::{decrypt, decrypt_file, encrypt_file, envelope};
use crate::error::{PeerlinkError, PeerlinkResult};

/// File encryption commands
#[derive(Subcommand)]
pub enum FileCommands {
    /// Encrypt a file
    #[command(name = "encrypt-file")]
    Encrypt {
        /// File to encrypt
        input: PathBuf,
        /// Where to write the encrypted file
        #[arg(short, long)]
        output: PathBuf,
        /// Write a base64 envelope instead of raw bytes
        #[arg(long)]
        armor: bool,
        /// Base64 encryption key (prompted if omitted)
        #[arg(short, long, env = "PEERLINK_KEY", hide_env_values = true)]
        key: Option<String>,
    },
    /// Decrypt a file
    #[command(name = "decrypt-file")]
    Decrypt {
        /// Encrypted file
        input: PathBuf,
        /// Where to write the decrypted file
        #[arg(short, long)]
        output: PathBuf,
        /// Read a base64 envelope instead of raw bytes
        #[arg(long)]
        armor: bool,
        /// Base64 encryption key (prompted if omitted)
        #[arg(short, long, env = "PEERLINK_KEY", hide_env_values = true)]
        key: Option<String>,
    },
}

/// Handle file encryption commands
pub fn handle_file_command(settings: &Settings, cmd: FileCommands) -> PeerlinkResult<()> {
    match cmd {
        FileCommands::Encrypt {
            input,
            output,
            armor,
            key,
        } => {
            let key = resolve_key(key)?;
            let contents = zeroize::Zeroizing::new(read_file(&input)?);
            let sealed = encrypt_file(&contents, &key)?;

            if armor || settings.armor_files {
                write_file(&output, envelope::encode(&sealed).as_bytes())?;
            } else {
                write_file(&output, &sealed)?;
            }
            info!(bytes = contents.len(), output = %output.display(), "encrypted file");
            println!("Encrypted {} -> {}", input.display(), output.display());
        }
        FileCommands::Decrypt {
            input,
            output,
            armor,
            key,
        } => {
            let key = resolve_key(key)?;
            let contents = read_file(&input)?;

            let plaintext = zeroize::Zeroizing::new(if armor || settings.armor_files {
                let text = String::from_utf8(contents).map_err(|_| {
                    PeerlinkError::envelope_format("armored file is not base64 text")
                })?;
                decrypt(text.trim(), &key)?
            } else {
                decrypt_file(&contents, &key)?
            });

            write_file(&output, &plaintext)?;
            info!(bytes = plaintext.len(), output = %output.display(), "decrypted file");
            println!("Decrypted {} -> {}", input.display(), output.display());
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> PeerlinkResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| PeerlinkError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

fn write_file(path: &Path, contents: &[u8]) -> PeerlinkResult<()> {
    std::fs::write(path, contents)
        .map_err(|e| PeerlinkError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
