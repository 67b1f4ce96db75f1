//! Puzzle dictionary
//!
//! The set of words accepted as guesses plus the pool secret answers are drawn from.
//! Static for the life of the process; a `Game` borrows it.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// Errors building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("word list contains no usable answers")]
    NoAnswers,
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Valid-guess set and answer pool
#[derive(Debug, Clone)]
pub struct Dictionary {
    valid: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from an answer pool and extra allowed guesses
    ///
    /// Answers are always accepted as guesses, whether or not `allowed` lists them.
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty.
    pub fn from_words(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let mut valid: FxHashSet<Word> = allowed.into_iter().collect();
        valid.extend(answers.iter().cloned());

        Ok(Self { valid, answers })
    }

    /// The word lists embedded at build time
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_words(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    /// Load a custom newline-delimited list used both as answers and valid guesses
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let words = loader::load_from_file(path)?;
        Self::from_words(words.clone(), words)
    }

    /// Membership test against the valid-guess set
    ///
    /// Case-insensitive; anything that is not a five-letter word is rejected.
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.valid.contains(&w))
    }

    /// Membership test for an already validated word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Draw a secret answer uniformly from the answer pool
    pub fn pick_secret_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // Construction guarantees a non-empty pool
        self.answers
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| self.answers[0].clone())
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    /// The answer pool
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::from_words(
            loader::words_from_slice(&["crane", "slate"]),
            loader::words_from_slice(&["anger", "eerie"]),
        )
        .unwrap()
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_answers_are_valid_guesses() {
        let dictionary = Dictionary::embedded().unwrap();
        for &answer in ANSWERS {
            assert!(dictionary.is_valid_guess(answer), "{answer} not accepted");
        }
    }

    #[test]
    fn answers_are_always_valid_guesses() {
        let dictionary = small();
        assert!(dictionary.is_valid_guess("crane"));
        assert!(dictionary.is_valid_guess("anger"));
        assert_eq!(dictionary.len(), 4);
    }

    #[test]
    fn membership_is_case_insensitive_and_strict() {
        let dictionary = small();
        assert!(dictionary.is_valid_guess("CRANE"));
        assert!(!dictionary.is_valid_guess("crank"));
        assert!(!dictionary.is_valid_guess("cran"));
        assert!(!dictionary.is_valid_guess("cranes"));
        assert!(!dictionary.is_valid_guess(""));
    }

    #[test]
    fn empty_answer_pool_is_rejected() {
        let result = Dictionary::from_words(Vec::new(), loader::words_from_slice(&["crane"]));
        assert!(matches!(result, Err(DictionaryError::NoAnswers)));
    }

    #[test]
    fn secret_is_drawn_from_answers() {
        let dictionary = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = dictionary.pick_secret_answer(&mut rng);
            assert!(dictionary.answers().contains(&secret));
        }
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let dictionary = Dictionary::embedded().unwrap();
        let a = dictionary.pick_secret_answer(&mut StdRng::seed_from_u64(42));
        let b = dictionary.pick_secret_answer(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn custom_file_serves_as_both_lists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"crane\nslate\n").unwrap();

        let dictionary = Dictionary::from_file(file.path()).unwrap();
        assert_eq!(dictionary.answers().len(), 2);
        assert!(dictionary.is_valid_guess("slate"));
    }
}
