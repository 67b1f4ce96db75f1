//! Score command
//!
//! Evaluates one guess against one secret and prints the verdict. With an expected
//! pattern it doubles as a check of the evaluator.

use crate::core::{Feedback, Word};
use crate::output::{feedback_to_letters, write_evaluation};
use anyhow::{Context, Result, bail};
use std::io::Write;

/// Evaluate `guess` against `secret` and write the coloured result
///
/// Neither word has to be in the dictionary; both only need to be five letters. When
/// `expected` is given (`G/Y/-` letters or emoji) the evaluation must match it.
///
/// # Errors
/// Returns an error if either word or the pattern is malformed, the evaluation differs
/// from `expected`, or the output cannot be written.
pub fn run_score<W: Write>(
    guess: &str,
    secret: &str,
    expected: Option<&str>,
    out: &mut W,
) -> Result<Feedback> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let expected = expected
        .map(|pattern| {
            Feedback::parse(pattern).with_context(|| format!("invalid pattern '{pattern}'"))
        })
        .transpose()?;

    let feedback = Feedback::evaluate(&guess, &secret);
    write_evaluation(out, &guess, &secret, &feedback)?;

    if let Some(expected) = expected
        && expected != feedback
    {
        bail!(
            "expected {} but got {}",
            feedback_to_letters(&expected),
            feedback_to_letters(&feedback)
        );
    }
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Absent, Correct, Misplaced};

    #[test]
    fn scores_duplicate_letters() {
        let mut out = Vec::new();
        let feedback = run_score("EERIE", "speed", None, &mut out).unwrap();

        assert_eq!(
            feedback.marks(),
            &[Misplaced, Misplaced, Absent, Absent, Absent]
        );
        assert!(!out.is_empty());
    }

    #[test]
    fn rejects_malformed_words() {
        let mut out = Vec::new();
        let err = run_score("cran", "crane", None, &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid guess 'cran'"));

        assert!(run_score("crane", "cr4ne", None, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn solved_guess() {
        let mut out = Vec::new();
        let feedback = run_score("crane", "crane", None, &mut out).unwrap();
        assert!(feedback.is_solved());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn matching_pattern_passes() {
        let mut out = Vec::new();
        assert!(run_score("crane", "crane", Some("ggggg"), &mut out).is_ok());
        assert!(run_score("anger", "crane", Some("🟨🟨⬜🟨🟨"), &mut out).is_ok());
    }

    #[test]
    fn mismatched_pattern_fails() {
        let mut out = Vec::new();
        let err = run_score("anger", "crane", Some("YY-YG"), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "expected YY-YG but got YY-YY");
        assert!(!out.is_empty());
    }

    #[test]
    fn malformed_pattern_is_rejected_before_output() {
        let mut out = Vec::new();
        let err = run_score("anger", "crane", Some("GGX"), &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid pattern 'GGX'"));
        assert!(out.is_empty());
    }
}
