//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the crypto layer.

pub mod file;
pub mod invite;
pub mod key;
pub mod message;

pub use file::{handle_file_command, FileCommands};
pub use invite::{handle_invite_command, InviteCommands};
pub use key::{handle_keygen_command, resolve_key};
pub use message::{handle_message_command, MessageCommands};

use std::io::Read;

use crate::error::PeerlinkResult;

/// Use the given argument, or read all of stdin when it is absent
pub(crate) fn read_input(arg: Option<String>) -> PeerlinkResult<String> {
    match arg {
        Some(value) => Ok(value),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(strip_line_ending(buf))
        }
    }
}

/// Drop one trailing newline left by `echo` or a terminal
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
