//! Key CLI commands
//!
//! Generates keys and resolves the key a command should use.

use zeroize::Zeroizing;

use crate::crypto::generate_key;
use crate::error::{PeerlinkError, PeerlinkResult};

/// Print a freshly generated key
pub fn handle_keygen_command() -> PeerlinkResult<()> {
    println!("{}", generate_key());
    Ok(())
}

/// Pick the key from the flag/env value, or prompt for it without echo
pub fn resolve_key(arg: Option<String>) -> PeerlinkResult<Zeroizing<String>> {
    let raw = match arg {
        Some(key) => Zeroizing::new(key),
        None => Zeroizing::new(
            rpassword::prompt_password("Encryption key: ")
                .map_err(|e| PeerlinkError::Io(format!("Failed to read key: {}", e)))?,
        ),
    };

    Ok(Zeroizing::new(raw.trim().to_string()))
}
