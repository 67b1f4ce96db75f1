//! Wordle Engine
//!
//! Guess evaluation and game state for the five-letter word puzzle, with resumable
//! persistence and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, Mark, Word};
//!
//! let guess = Word::new("anger").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.mark_at(2), Mark::Absent);
//! println!("{}", feedback.to_emoji());
//! ```
//!
//! Driving a whole puzzle goes through [`game::Game`]:
//!
//! ```rust
//! use wordle_engine::dictionary::Dictionary;
//! use wordle_engine::game::{Game, KeyInput, Status};
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut game = Game::new(&dictionary, None);
//! for c in "crane".chars() {
//!     game.edit_current_guess(KeyInput::Letter(c));
//! }
//! let submission = game.submit_guess().unwrap();
//! assert_eq!(submission.row, 0);
//! game.settle(submission.ticket);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

pub mod error;

// Puzzle state machine
pub mod game;

// Saved games
pub mod storage;

pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
