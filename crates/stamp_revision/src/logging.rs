// crates/stamp_revision/src/logging.rs

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::StampConfig;

/// Installs a subscriber that writes to stderr; stdout carries the stamped text.
///
/// `RUST_LOG` wins over the level from `config`. Records emitted through the
/// `log` macros are forwarded to the subscriber.
pub fn init(config: &StampConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_directive()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}
