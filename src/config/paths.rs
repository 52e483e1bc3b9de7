//! Path management for PeerLink
//!
//! ## Path Resolution Order
//!
//! 1. `PEERLINK_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/peerlink` or `~/.config/peerlink`
//! 3. Windows: `%APPDATA%\peerlink`

use std::path::PathBuf;

use crate::error::PeerlinkError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "PEERLINK_CONFIG_DIR";

/// Manages the paths used by PeerLink
#[derive(Debug, Clone)]
pub struct PeerlinkPaths {
    base_dir: PathBuf,
}

impl PeerlinkPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory is set.
    pub fn new() -> Result<Self, PeerlinkError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PeerlinkPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/peerlink/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), PeerlinkError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PeerlinkError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PeerlinkError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .ok_or_else(|| {
                PeerlinkError::Config("Could not determine home directory".into())
            })?,
    };
    Ok(config_base.join("peerlink"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PeerlinkError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| PeerlinkError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("peerlink"))
}
