//! Command implementations

pub mod reset;
pub mod score;
pub mod simple;

pub use reset::run_reset;
pub use score::run_score;
pub use simple::{SessionStats, play_lines, run_simple};
