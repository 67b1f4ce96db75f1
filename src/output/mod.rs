//! Terminal output formatting
//!
//! Coloured board rendering for the line-based front end, plus emoji summaries.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_evaluation, write_keyboard, write_outcome};
pub use formatters::{KEYBOARD_ROWS, feedback_to_letters, rows_to_emoji, score_line};
