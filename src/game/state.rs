//! Puzzle state snapshots
//!
//! `PuzzleState` is an immutable value. Every transition builds a new value from the old
//! one plus a delta; submitted rows are shared between successive snapshots, so handing a
//! snapshot to an observer or keeping one around for rendering is cheap.

use crate::core::{Feedback, KeyStatus, WORD_LENGTH, Word};
use crate::error::EngineError;
use std::rc::Rc;

/// Guesses allowed per puzzle
pub const MAX_ATTEMPTS: usize = 6;

/// Where the puzzle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Accepting edits and submissions
    Active,
    /// Last submitted guess matched the secret
    Won,
    /// All attempts used without a match
    Lost,
}

/// A submitted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub word: Word,
    pub feedback: Feedback,
}

/// Complete puzzle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    secret: Word,
    current_guess: String,
    rows: Rc<[Row]>,
    key_status: KeyStatus,
    status: Status,
}

impl PuzzleState {
    /// A new puzzle with empty history
    #[must_use]
    pub fn fresh(secret: Word) -> Self {
        Self {
            secret,
            current_guess: String::new(),
            rows: Rc::from(Vec::new()),
            key_status: KeyStatus::new(),
            status: Status::Active,
        }
    }

    /// Rebuild a puzzle by evaluating `guesses` in order against `secret`
    ///
    /// Key status and completion are recomputed, never taken on trust.
    ///
    /// # Errors
    /// Returns `MalformedPersistedState` if there are more than six guesses or a guess
    /// follows one that already completed the puzzle.
    pub fn replay(secret: Word, guesses: &[Word]) -> Result<Self, EngineError> {
        if guesses.len() > MAX_ATTEMPTS {
            return Err(EngineError::MalformedPersistedState(format!(
                "{} guesses exceeds the limit of {MAX_ATTEMPTS}",
                guesses.len()
            )));
        }

        let mut state = Self::fresh(secret);
        for (i, guess) in guesses.iter().enumerate() {
            if state.is_complete() {
                return Err(EngineError::MalformedPersistedState(format!(
                    "guess {} follows a finished puzzle",
                    i + 1
                )));
            }
            state = state.with_submission(guess.clone());
        }

        Ok(state)
    }

    /// State with `letter` appended to the current guess
    ///
    /// Callers check the guess has room; the letter must be lowercase a-z.
    #[must_use]
    pub fn with_letter(&self, letter: char) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        debug_assert!(self.current_guess.len() < WORD_LENGTH);

        let mut current_guess = self.current_guess.clone();
        current_guess.push(letter);
        Self {
            current_guess,
            ..self.clone()
        }
    }

    /// State with the last letter of the current guess removed
    #[must_use]
    pub fn without_last_letter(&self) -> Self {
        let mut current_guess = self.current_guess.clone();
        current_guess.pop();
        Self {
            current_guess,
            ..self.clone()
        }
    }

    /// State after `guess` is submitted
    ///
    /// Evaluates the guess, appends the row, merges key status, clears the current guess
    /// and recomputes the status: a match wins, otherwise the sixth row loses.
    #[must_use]
    pub fn with_submission(&self, guess: Word) -> Self {
        debug_assert_eq!(self.status, Status::Active);

        let feedback = Feedback::evaluate(&guess, &self.secret);
        let key_status = self.key_status.merged(&guess, &feedback);

        let mut rows = self.rows.to_vec();
        rows.push(Row {
            word: guess,
            feedback,
        });

        let status = if feedback.is_solved() {
            Status::Won
        } else if rows.len() >= MAX_ATTEMPTS {
            Status::Lost
        } else {
            Status::Active
        };

        Self {
            secret: self.secret.clone(),
            current_guess: String::new(),
            rows: Rc::from(rows),
            key_status,
            status,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The in-progress, unsubmitted entry (0-5 lowercase letters)
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Submitted rows, oldest first
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Submitted guesses, oldest first
    pub fn submitted_guesses(&self) -> impl Iterator<Item = &Word> {
        self.rows.iter().map(|row| &row.word)
    }

    #[must_use]
    pub const fn key_status(&self) -> &KeyStatus {
        &self.key_status
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status != Status::Active
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS - self.rows.len()
    }

    /// Letters to show in a board row: the submitted word, the in-progress guess on the
    /// next free row, or nothing
    #[must_use]
    pub fn row_text(&self, index: usize) -> &str {
        match self.rows.get(index) {
            Some(row) => row.word.text(),
            None if index == self.rows.len() && !self.is_complete() => &self.current_guess,
            None => "",
        }
    }
}
