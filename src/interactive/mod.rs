//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};

use crate::config::Config;
use anyhow::Result;

/// Play in the terminal UI with the configured word list and storage
///
/// # Errors
/// Returns an error if the word list cannot be loaded or the terminal fails.
pub fn run_play(config: &Config) -> Result<()> {
    let dictionary = config.load_dictionary()?;
    let app = App::new(config.new_game(&dictionary));
    run_tui(app)
}
