//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyStatus, Mark};
use crate::game::PuzzleState;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Shareable summary of a finished or in-progress puzzle
///
/// One line per submitted row, e.g. `🟩⬜🟨⬜⬜`.
#[must_use]
pub fn rows_to_emoji(state: &PuzzleState) -> String {
    state
        .rows()
        .iter()
        .map(|row| row.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `3/6`, or `X/6` for a lost puzzle
#[must_use]
pub fn score_line(state: &PuzzleState) -> String {
    use crate::game::{MAX_ATTEMPTS, Status};

    match state.status() {
        Status::Lost => format!("X/{MAX_ATTEMPTS}"),
        _ => format!("{}/{MAX_ATTEMPTS}", state.attempts_used()),
    }
}

/// Feedback as `G`/`Y`/`-` letters
#[must_use]
pub fn feedback_to_letters(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Correct => 'G',
            Mark::Misplaced => 'Y',
            Mark::Absent => '-',
        })
        .collect()
}

/// Keyboard row with each key tagged by its best mark, if any
#[must_use]
pub fn keyboard_row(keys: &KeyStatus, row: &str) -> Vec<(char, Option<Mark>)> {
    row.bytes()
        .map(|letter| (char::from(letter), keys.get(letter)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn played(secret: &str, guesses: &[&str]) -> PuzzleState {
        let guesses: Vec<Word> = guesses.iter().map(|g| Word::new(*g).unwrap()).collect();
        PuzzleState::replay(Word::new(secret).unwrap(), &guesses).unwrap()
    }

    #[test]
    fn emoji_summary_has_one_line_per_row() {
        let state = played("crane", &["slate", "crane"]);
        assert_eq!(rows_to_emoji(&state), "⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn score_line_reports_attempts() {
        assert_eq!(score_line(&played("crane", &["slate", "crane"])), "2/6");
        assert_eq!(
            score_line(&played(
                "crane",
                &["slate", "anger", "eerie", "speed", "robot", "floor"]
            )),
            "X/6"
        );
    }

    #[test]
    fn letters_format() {
        let feedback =
            Feedback::evaluate(&Word::new("eerie").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(feedback_to_letters(&feedback), "--Y-G");
    }

    #[test]
    fn keyboard_rows_cover_alphabet_once() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|row| row.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn keyboard_row_tags_known_letters() {
        let state = played("crane", &["slate"]);
        let row = keyboard_row(state.key_status(), "asdfghjkl");

        assert_eq!(row[0], ('a', Some(Mark::Correct)));
        assert_eq!(row[1], ('s', Some(Mark::Absent)));
        assert_eq!(row[2], ('d', None));
    }
}
