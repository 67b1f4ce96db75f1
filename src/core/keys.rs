//! Keyboard key status
//!
//! Tracks the best mark each letter has earned across all submitted guesses. Ranks only
//! ever go up (`Absent < Misplaced < Correct`), so a key shown green stays green.

use super::feedback::{Feedback, Mark};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Best mark per letter across a puzzle's submitted guesses
///
/// Only letters that have appeared in a guess have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatus {
    keys: FxHashMap<u8, Mark>,
}

impl KeyStatus {
    /// Empty status (no letters guessed yet)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status after folding in one evaluated guess
    ///
    /// For each letter the best mark among its occurrences in `guess` is merged by
    /// taking the maximum with the existing rank.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, KeyStatus, Mark, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let first = Word::new("cabin").unwrap();
    /// let second = Word::new("bacon").unwrap();
    ///
    /// let status = KeyStatus::new()
    ///     .merged(&first, &Feedback::evaluate(&first, &secret))
    ///     .merged(&second, &Feedback::evaluate(&second, &secret));
    ///
    /// // `c` was green in CABIN and only yellow in BACON: it stays green
    /// assert_eq!(status.get(b'c'), Some(Mark::Correct));
    /// assert_eq!(status.get(b'b'), Some(Mark::Absent));
    /// assert_eq!(status.get(b'z'), None);
    /// ```
    #[must_use]
    pub fn merged(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut keys = self.keys.clone();

        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            keys.entry(letter)
                .and_modify(|best| *best = (*best).max(mark))
                .or_insert(mark);
        }

        Self { keys }
    }

    /// Best mark for a letter, `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Mark> {
        self.keys.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of letters with a status
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Letters and their marks in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(u8, Mark)> {
        let mut entries: Vec<(u8, Mark)> = self.keys.iter().map(|(&k, &m)| (k, m)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn merge_guess(status: &KeyStatus, guess: &str, secret: &str) -> KeyStatus {
        let guess = word(guess);
        let feedback = Feedback::evaluate(&guess, &word(secret));
        status.merged(&guess, &feedback)
    }

    #[test]
    fn empty_status_has_no_entries() {
        let status = KeyStatus::new();
        assert!(status.is_empty());
        assert_eq!(status.get(b'a'), None);
    }

    #[test]
    fn entries_only_for_guessed_letters() {
        let status = merge_guess(&KeyStatus::new(), "crane", "slate");
        assert_eq!(status.len(), 5);
        assert_eq!(status.get(b'a'), Some(Mark::Correct));
        assert_eq!(status.get(b'e'), Some(Mark::Correct));
        assert_eq!(status.get(b'c'), Some(Mark::Absent));
        assert_eq!(status.get(b's'), None);
    }

    #[test]
    fn best_occurrence_within_one_guess_wins() {
        // First e of eerie is absent, the last one is green
        let status = merge_guess(&KeyStatus::new(), "eerie", "crane");
        assert_eq!(status.get(b'e'), Some(Mark::Correct));
    }

    #[test]
    fn correct_never_downgrades() {
        let status = merge_guess(&KeyStatus::new(), "cabin", "crane");
        assert_eq!(status.get(b'c'), Some(Mark::Correct));

        let status = merge_guess(&status, "bacon", "crane");
        assert_eq!(status.get(b'c'), Some(Mark::Correct));
    }

    #[test]
    fn misplaced_upgrades_to_correct() {
        let status = merge_guess(&KeyStatus::new(), "react", "crane");
        assert_eq!(status.get(b'a'), Some(Mark::Correct));
        assert_eq!(status.get(b'c'), Some(Mark::Misplaced));
        assert_eq!(status.get(b'r'), Some(Mark::Misplaced));

        let status = merge_guess(&status, "crate", "crane");
        assert_eq!(status.get(b'c'), Some(Mark::Correct));
        assert_eq!(status.get(b'r'), Some(Mark::Correct));
    }

    #[test]
    fn merging_same_guess_twice_is_idempotent() {
        let once = merge_guess(&KeyStatus::new(), "anger", "crane");
        let twice = merge_guess(&once, "anger", "crane");
        assert_eq!(once, twice);
    }

    #[test]
    fn merged_leaves_original_untouched() {
        let original = KeyStatus::new();
        let _ = merge_guess(&original, "crane", "slate");
        assert!(original.is_empty());
    }

    #[test]
    fn sorted_is_alphabetical() {
        let status = merge_guess(&KeyStatus::new(), "crane", "slate");
        let letters: Vec<u8> = status.sorted().into_iter().map(|(l, _)| l).collect();
        assert_eq!(letters, b"acenr");
    }
}
