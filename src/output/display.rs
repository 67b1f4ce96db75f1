//! Coloured board and keyboard for line-based output

use super::formatters::{
    KEYBOARD_ROWS, feedback_to_letters, keyboard_row, rows_to_emoji, score_line,
};
use crate::core::{Feedback, KeyStatus, Mark, WORD_LENGTH, Word};
use crate::game::{MAX_ATTEMPTS, PuzzleState, Status};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(Mark::Correct) => text.black().on_green().bold(),
        Some(Mark::Misplaced) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Write the six-row board: evaluated rows, the guess being typed, then blanks
///
/// # Errors
/// Propagates write failures.
pub fn write_board<W: Write>(out: &mut W, state: &PuzzleState) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(WORD_LENGTH * 3 + 4).cyan())?;

    for row in state.rows() {
        write!(out, "  ")?;
        for (letter, mark) in row.word.text().chars().zip(row.feedback.marks()) {
            write!(out, "{}", tile(letter, Some(*mark)))?;
        }
        writeln!(out)?;
    }

    let mut remaining = MAX_ATTEMPTS - state.attempts_used();
    if !state.is_complete() && remaining > 0 {
        let typed = state.current_guess();
        write!(out, "  ")?;
        for i in 0..WORD_LENGTH {
            let letter = typed.chars().nth(i).unwrap_or('_');
            write!(out, "{}", tile(letter, None))?;
        }
        writeln!(out)?;
        remaining -= 1;
    }

    for _ in 0..remaining {
        writeln!(out, "  {}", " · ".repeat(WORD_LENGTH).bright_black())?;
    }

    writeln!(out, "{}", "─".repeat(WORD_LENGTH * 3 + 4).cyan())
}

/// Write the keyboard with each letter coloured by its best mark so far
///
/// # Errors
/// Propagates write failures.
pub fn write_keyboard<W: Write>(out: &mut W, keys: &KeyStatus) -> io::Result<()> {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        write!(out, "{}", " ".repeat(indent * 2))?;
        for (letter, mark) in keyboard_row(keys, row) {
            let key = letter.to_ascii_uppercase().to_string();
            let key = match mark {
                Some(Mark::Correct) => key.green().bold(),
                Some(Mark::Misplaced) => key.yellow().bold(),
                Some(Mark::Absent) => key.bright_black(),
                None => key.normal(),
            };
            write!(out, "{key} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the end-of-puzzle banner and shareable summary
///
/// Writes nothing while the puzzle is active.
///
/// # Errors
/// Propagates write failures.
pub fn write_outcome<W: Write>(out: &mut W, state: &PuzzleState) -> io::Result<()> {
    match state.status() {
        Status::Active => return Ok(()),
        Status::Won => {
            let praise = match state.attempts_used() {
                1 => "Genius!",
                2 => "Magnificent!",
                3 => "Impressive!",
                4 => "Splendid!",
                5 => "Great!",
                _ => "Phew!",
            };
            writeln!(out, "\n{} {}", "🎉".bold(), praise.bright_green().bold())?;
        }
        Status::Lost => {
            writeln!(
                out,
                "\n{} {}",
                "The word was".red(),
                state.secret().text().to_uppercase().bright_yellow().bold()
            )?;
        }
    }

    writeln!(out, "\nWordle {}", score_line(state))?;
    writeln!(out, "{}", rows_to_emoji(state))
}

/// Write a single evaluation, as printed by the `score` command
///
/// # Errors
/// Propagates write failures.
pub fn write_evaluation<W: Write>(
    out: &mut W,
    guess: &Word,
    secret: &Word,
    feedback: &Feedback,
) -> io::Result<()> {
    write!(
        out,
        "{} vs {}  ",
        guess.text().to_uppercase(),
        secret.text().to_uppercase()
    )?;
    for (letter, mark) in guess.text().chars().zip(feedback.marks()) {
        write!(out, "{}", tile(letter, Some(*mark)))?;
    }
    writeln!(
        out,
        "  {}  {}",
        feedback.to_emoji(),
        feedback_to_letters(feedback)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        plain();
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn played(secret: &str, guesses: &[&str]) -> PuzzleState {
        let guesses: Vec<Word> = guesses.iter().map(|g| Word::new(*g).unwrap()).collect();
        PuzzleState::replay(Word::new(secret).unwrap(), &guesses).unwrap()
    }

    #[test]
    fn board_shows_rows_guess_and_blanks() {
        let state = played("crane", &["slate"]).with_letter('c').with_letter('r');
        let board = render(|out| write_board(out, &state));
        let lines: Vec<&str> = board.lines().collect();

        // rule, 1 row, current guess, 4 blanks, rule
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "   S  L  A  T  E ");
        assert_eq!(lines[2], "   C  R  _  _  _ ");
    }

    #[test]
    fn finished_board_has_no_input_row() {
        let state = played("crane", &["crane"]);
        let board = render(|out| write_board(out, &state));
        assert_eq!(board.lines().count(), 2 + MAX_ATTEMPTS);
        assert!(!board.contains('_'));
    }

    #[test]
    fn keyboard_has_three_rows() {
        let state = played("crane", &["slate"]);
        let keyboard = render(|out| write_keyboard(out, state.key_status()));
        let lines: Vec<&str> = keyboard.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Q W E R T"));
        assert!(lines[2].starts_with("    Z X C"));
    }

    #[test]
    fn outcome_only_after_completion() {
        assert!(render(|out| write_outcome(out, &played("crane", &["slate"]))).is_empty());

        let won = render(|out| write_outcome(out, &played("crane", &["slate", "crane"])));
        assert!(won.contains("Magnificent!"));
        assert!(won.contains("Wordle 2/6"));

        let lost = render(|out| {
            write_outcome(
                out,
                &played("crane", &["slate", "anger", "eerie", "speed", "robot", "floor"]),
            )
        });
        assert!(lost.contains("The word was CRANE"));
        assert!(lost.contains("Wordle X/6"));
    }

    #[test]
    fn evaluation_line() {
        let guess = Word::new("anger").unwrap();
        let secret = Word::new("crane").unwrap();
        let feedback = Feedback::evaluate(&guess, &secret);

        let line = render(|out| write_evaluation(out, &guess, &secret, &feedback));
        assert!(line.starts_with("ANGER vs CRANE"));
        assert!(line.trim_end().ends_with("🟨🟨⬜🟨🟨  YY-YY"));
    }
}
