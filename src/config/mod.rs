//! Configuration module for PeerLink
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PeerlinkPaths;
pub use settings::Settings;
