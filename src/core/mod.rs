//! Core domain types for the puzzle
//!
//! Pure value types with no I/O: words, per-letter feedback, and keyboard key status.

mod feedback;
mod keys;
mod word;

pub use feedback::{Feedback, Mark};
pub use keys::KeyStatus;
pub use word::{WORD_LENGTH, Word, WordError};
