//! Guess feedback evaluation
//!
//! Each position of a guess is classified as one of three marks:
//! - `Absent` (gray): no unconsumed occurrence of the letter remains in the secret
//! - `Misplaced` (yellow): the letter occurs elsewhere in the secret
//! - `Correct` (green): the letter matches the secret at this position
//!
//! Marks are totally ordered `Absent < Misplaced < Correct`; the ordering is what
//! key-status aggregation ranks by.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Misplaced,
    Correct,
}

impl Mark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character (`G`/`Y`/`-`, case-insensitive, or emoji)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one evaluated guess: one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Build feedback from explicit marks
    #[must_use]
    pub const fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Classify `guess` against `secret`
    ///
    /// Duplicate letters are reconciled by consuming secret positions:
    /// 1. First pass: exact position matches are `Correct` and consume that secret position
    /// 2. Second pass: each remaining guess letter consumes the leftmost unconsumed matching
    ///    secret position and is `Misplaced`; with none left it is `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let secret = Word::new("floor").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Misplaced, Mark::Misplaced, Mark::Absent, Mark::Correct, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.chars();
        let secret = secret.chars();
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: Index needed to read guess[i], secret[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                marks[i] = Mark::Correct;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            let available = (0..WORD_LENGTH).find(|&j| !consumed[j] && secret[j] == guess[i]);
            if let Some(j) = available {
                marks[i] = Mark::Misplaced;
                consumed[j] = true;
            }
        }

        Self(marks)
    }

    /// The five marks in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut marks {
            *slot = Mark::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}
