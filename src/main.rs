//! Wordle - CLI
//!
//! Play the five-letter word puzzle in a terminal UI or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_engine::{
    commands::{run_reset, run_score, run_simple},
    config::{Config, default_storage_dir},
    interactive::run_play,
    logging::{self, LogTarget},
    storage::DEFAULT_KEY,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited word list used for both answers and valid guesses
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory holding saved games (default: platform data dir)
    #[arg(long, global = true, env = "WORDLE_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Storage key of the saved puzzle
    #[arg(short, long, global = true, default_value = DEFAULT_KEY)]
    key: String,

    /// Do not read or write saved games
    #[arg(long, global = true)]
    no_save: bool,

    /// Seed for secret word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Evaluate a guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,

        /// Fail unless the result matches this pattern (e.g. "YY-YG" or emoji)
        #[arg(long)]
        expect: Option<String>,
    },

    /// Delete the saved puzzle
    Reset,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            wordlist: self.wordlist.clone(),
            storage_dir: self.storage_dir.clone().or_else(default_storage_dir),
            key: self.key.clone(),
            no_save: self.no_save,
            seed: self.seed,
            verbosity: self.verbose,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go next to the saved games
    let target = match (&command, &config.storage_dir) {
        (Commands::Play, Some(dir)) => LogTarget::FileIn(dir.clone()),
        _ => LogTarget::Stderr,
    };
    logging::init(config.verbosity, &target).context("failed to initialise logging")?;

    match command {
        Commands::Play => run_play(&config),
        Commands::Simple => run_simple(&config).map(|_| ()),
        Commands::Score {
            guess,
            secret,
            expect,
        } => run_score(&guess, &secret, expect.as_deref(), &mut io::stdout()).map(|_| ()),
        Commands::Reset => {
            if run_reset(&config)? {
                println!("Saved puzzle '{}' cleared.", config.key);
            } else {
                println!("No saved games to clear.");
            }
            Ok(())
        }
    }
}
