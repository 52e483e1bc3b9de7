//! Tracing initialization for the `peerlink` binary
//!
//! Logs go to stderr so envelopes and keys printed on stdout can be piped.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `settings.log_filter` when set. Calling this twice
/// is harmless; the second install is ignored.
pub fn init(settings: &Settings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let _ = if settings.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
}
