//! Reset command
//!
//! Deletes the saved puzzle so the next session starts fresh.

use crate::config::Config;
use anyhow::Result;
use log::info;

/// Remove the saved game for the configured key
///
/// Returns false when there is no storage to clear (`--no-save` or no data directory).
///
/// # Errors
/// Returns an error if the stored record exists but cannot be removed.
pub fn run_reset(config: &Config) -> Result<bool> {
    let Some(mut storage) = config.persistence() else {
        return Ok(false);
    };

    storage.clear()?;
    info!("cleared saved game '{}'", config.key);
    Ok(true)
}
