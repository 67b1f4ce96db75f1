//! Simple line-based play
//!
//! Text front end without a TUI. Each input line is typed into the engine letter by letter
//! and submitted; `new` starts another puzzle and `quit` leaves.

use crate::config::Config;
use crate::core::WORD_LENGTH;
use crate::error::EngineError;
use crate::game::{Game, KeyInput, Resumed, Status};
use crate::output::{write_board, write_keyboard, write_outcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Tally of puzzles finished during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub won: usize,
}

/// Run the simple mode on stdin/stdout
///
/// # Errors
/// Returns an error if the word list cannot be loaded or the terminal cannot be written.
pub fn run_simple(config: &Config) -> Result<SessionStats> {
    let dictionary = config.load_dictionary()?;
    let mut game = config.new_game(&dictionary);
    let resumed = game.resume()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(stdout, "{}", "           W O R D L E".bright_green().bold())?;
    writeln!(stdout, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        stdout,
        "Guess the five-letter word in six tries. Commands: 'new', 'quit'."
    )?;
    if let Resumed::Restored { rows } = resumed {
        writeln!(stdout, "Resuming your saved puzzle ({rows} guesses so far).")?;
    }
    if !game.is_persistent() {
        writeln!(stdout, "{}", "Progress will not be saved.".yellow())?;
    }

    let stats = play_lines(&mut game, stdin.lock(), &mut stdout)?;
    Ok(stats)
}

/// Drive `game` from `input` until `quit` or end of input
///
/// # Errors
/// Propagates read and write failures.
pub fn play_lines<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    input: R,
    out: &mut W,
) -> io::Result<SessionStats> {
    let mut stats = SessionStats::default();

    show_state(game, out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "quit" | "exit" | "q" => break,
            "new" => {
                game.reset();
                writeln!(out, "\nNew puzzle started!")?;
                show_state(game, out)?;
            }
            _ if game.state().is_complete() => {
                writeln!(out, "This puzzle is over. Type 'new' or 'quit'.")?;
            }
            word if word.chars().count() > WORD_LENGTH => {
                writeln!(out, "{} too many letters", "✗".red())?;
            }
            word => {
                if let Some(status) = submit_line(game, word, out)? {
                    stats.played += 1;
                    if status == Status::Won {
                        stats.won += 1;
                    }
                }
            }
        }

        prompt(out)?;
    }

    writeln!(
        out,
        "\nThanks for playing! Won {} of {}.",
        stats.won, stats.played
    )?;
    Ok(stats)
}

/// Type `word` and submit it; returns the final status if this finished the puzzle
fn submit_line<W: Write>(
    game: &mut Game<'_>,
    word: &str,
    out: &mut W,
) -> io::Result<Option<Status>> {
    clear_guess(game);
    for c in word.chars() {
        game.edit_current_guess(KeyInput::Letter(c));
    }

    match game.handle_key(KeyInput::Enter) {
        Ok(Some(submission)) => {
            // No animation in line mode; the row is presented at once
            game.settle(submission.ticket);
            show_state(game, out)?;

            if submission.status == Status::Active {
                Ok(None)
            } else {
                write_outcome(out, game.state())?;
                writeln!(out, "\nType 'new' to play again or 'quit' to exit.")?;
                Ok(Some(submission.status))
            }
        }
        Ok(None) => Ok(None),
        Err(EngineError::InvalidGuess(reason)) => {
            writeln!(out, "{} {reason}", "✗".red())?;
            clear_guess(game);
            Ok(None)
        }
        Err(e) => {
            writeln!(out, "{} {e}", "✗".red())?;
            Ok(None)
        }
    }
}

fn clear_guess(game: &mut Game<'_>) {
    while game.edit_current_guess(KeyInput::Delete) {}
}

fn show_state<W: Write>(game: &Game<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write_board(out, game.state())?;
    write_keyboard(out, game.state().key_status())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\nGuess: ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(
            words_from_slice(&["crane"]),
            words_from_slice(&["slate", "anger", "eerie", "speed", "robot", "floor"]),
        )
        .unwrap()
    }

    fn run<'a>(dictionary: &'a Dictionary, script: &str) -> (SessionStats, String, Game<'a>) {
        colored::control::set_override(false);
        let mut game = Game::with_rng(dictionary, None, StdRng::seed_from_u64(5));
        let mut out = Vec::new();
        let stats = play_lines(&mut game, Cursor::new(script.to_string()), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap(), game)
    }

    #[test]
    fn winning_session() {
        let dictionary = dictionary();
        let (stats, out, game) = run(&dictionary, "slate\ncrane\nquit\n");

        assert_eq!(stats, SessionStats { played: 1, won: 1 });
        assert_eq!(game.state().status(), Status::Won);
        assert!(out.contains("Magnificent!"));
        assert!(out.contains("Won 1 of 1"));
    }

    #[test]
    fn rejected_words_do_not_use_attempts() {
        let dictionary = dictionary();
        let (_, out, game) = run(&dictionary, "zzzzz\ncran\nslates\nslate\n");

        assert!(out.contains("'zzzzz' is not in the word list"));
        assert!(out.contains("not enough letters (4 of 5)"));
        assert!(out.contains("too many letters"));
        assert_eq!(game.state().attempts_used(), 1);
        assert_eq!(game.state().current_guess(), "");
    }

    #[test]
    fn input_is_case_insensitive() {
        let dictionary = dictionary();
        let (stats, _, _) = run(&dictionary, "  CRANE  \n");
        assert_eq!(stats.won, 1);
    }

    #[test]
    fn losing_then_new_puzzle() {
        let dictionary = dictionary();
        let (stats, out, game) = run(
            &dictionary,
            "slate\nanger\neerie\nspeed\nrobot\nfloor\nslate\nnew\nslate\n",
        );

        assert_eq!(stats, SessionStats { played: 1, won: 0 });
        assert!(out.contains("The word was CRANE"));
        assert!(out.contains("This puzzle is over"));
        assert!(out.contains("New puzzle started!"));
        assert_eq!(game.state().attempts_used(), 1);
        assert_eq!(game.epoch(), 1);
    }

    #[test]
    fn end_of_input_ends_session() {
        let dictionary = dictionary();
        let (stats, out, _) = run(&dictionary, "");
        assert_eq!(stats, SessionStats::default());
        assert!(out.contains("Thanks for playing!"));
    }
}
