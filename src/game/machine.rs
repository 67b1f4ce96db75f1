//! The puzzle state machine
//!
//! `Game` owns the authoritative [`PuzzleState`], validates input against the dictionary,
//! persists the resumable subset after every row, and announces each transition on its
//! [`EventBus`].

use super::events::{EventBus, GameEvent, Observer, SubscriptionId};
use super::input::KeyInput;
use super::lock::{SettleTicket, SubmissionLock};
use super::state::{PuzzleState, Status};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use crate::error::{EngineError, GuessRejection, Result};
use crate::storage::{Persistence, SavedGame};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// A row accepted by [`Game::submit_guess`]
#[derive(Debug)]
pub struct Submission {
    /// Zero-based index of the new row
    pub row: usize,
    pub feedback: Feedback,
    pub status: Status,
    /// Must be passed to [`Game::settle`] once the row has been presented
    pub ticket: SettleTicket,
}

/// How [`Game::resume`] started the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resumed {
    /// Saved history was replayed
    Restored { rows: usize },
    /// No usable saved game; a new puzzle was started
    Fresh,
}

/// One live puzzle plus its collaborators
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    state: PuzzleState,
    storage: Option<Box<dyn Persistence + 'a>>,
    bus: EventBus,
    lock: SubmissionLock,
    rng: StdRng,
    epoch: u64,
    pristine: bool,
}

impl<'a> Game<'a> {
    /// Start a new puzzle with an OS-seeded secret draw
    ///
    /// Nothing is written to storage until the first transition or [`Game::resume`].
    pub fn new(dictionary: &'a Dictionary, storage: Option<Box<dyn Persistence + 'a>>) -> Self {
        Self::with_rng(dictionary, storage, StdRng::from_os_rng())
    }

    /// Start a new puzzle drawing secrets from `rng`
    pub fn with_rng(
        dictionary: &'a Dictionary,
        storage: Option<Box<dyn Persistence + 'a>>,
        mut rng: StdRng,
    ) -> Self {
        let secret = dictionary.pick_secret_answer(&mut rng);
        Self {
            dictionary,
            state: PuzzleState::fresh(secret),
            storage,
            bus: EventBus::new(),
            lock: SubmissionLock::default(),
            rng,
            epoch: 0,
            pristine: true,
        }
    }

    /// Replace the submission settle timeout
    #[must_use]
    pub fn with_settle_timeout(mut self, timeout: Duration) -> Self {
        self.lock = SubmissionLock::new(timeout);
        self
    }

    /// Continue the saved game if there is a usable one, otherwise keep the new puzzle
    ///
    /// Missing, unparsable, or structurally invalid records all start fresh; an
    /// unreadable store additionally drops to an unpersisted session.
    ///
    /// # Errors
    /// Returns `RestoreAfterEdit` if any input has been applied since construction.
    pub fn resume(&mut self) -> Result<Resumed> {
        if !self.pristine {
            return Err(EngineError::RestoreAfterEdit);
        }

        match self.load_saved() {
            Ok(Some(record)) => match self.restore_from(&record) {
                Ok(()) => {
                    return Ok(Resumed::Restored {
                        rows: self.state.attempts_used(),
                    });
                }
                Err(e) => warn!("discarding saved game: {e}"),
            },
            Ok(None) => debug!("no saved game"),
            Err(e) => {
                warn!("{e}; continuing without saving");
                self.storage = None;
            }
        }

        self.persist();
        Ok(Resumed::Fresh)
    }

    /// Rebuild the puzzle from a persisted record
    ///
    /// Replays every guess through the evaluator to recompute key status and completion,
    /// then raises [`GameEvent::RestoredFromHistory`].
    ///
    /// # Errors
    /// - `RestoreAfterEdit` if any input or an earlier restore has been applied since
    ///   construction
    /// - `MalformedPersistedState` if the record is not a valid game in this dictionary;
    ///   the current puzzle is left untouched
    pub fn restore_from(&mut self, record: &SavedGame) -> Result<()> {
        if !self.pristine {
            return Err(EngineError::RestoreAfterEdit);
        }

        let state = self.replay_record(record)?;
        let rows = state.attempts_used();
        info!("restored puzzle with {rows} guesses ({:?})", state.status());

        self.pristine = false;
        self.state = state;
        self.persist();
        self.publish(&GameEvent::RestoredFromHistory { rows });
        Ok(())
    }

    /// Apply a letter or delete key to the current guess
    ///
    /// Returns whether the state changed. Input is silently ignored when the puzzle is
    /// complete, a submission is in flight, the guess is full (letters) or empty
    /// (delete), or the key is not an a-z letter.
    pub fn edit_current_guess(&mut self, key: KeyInput) -> bool {
        if self.state.is_complete() || self.lock.is_held() {
            return false;
        }

        let next = match key {
            KeyInput::Letter(c) if c.is_ascii_alphabetic() => {
                if self.state.current_guess().len() >= WORD_LENGTH {
                    return false;
                }
                self.state.with_letter(c.to_ascii_lowercase())
            }
            KeyInput::Delete if !self.state.current_guess().is_empty() => {
                self.state.without_last_letter()
            }
            _ => return false,
        };

        self.pristine = false;
        self.state = next;
        self.publish(&GameEvent::StateChanged);
        true
    }

    /// Submit the current guess
    ///
    /// On success the row is evaluated and appended, the resumable state is saved, and
    /// `StateChanged`, `AnswerSubmitted` and (when terminal) `Completed` are raised in
    /// that order. The returned ticket holds the submission lock until settled.
    ///
    /// # Errors
    /// - `PuzzleComplete` once the puzzle has ended
    /// - `SubmissionInFlight` while a previous submission is unsettled
    /// - `InvalidGuess` for fewer than five letters or a word outside the dictionary;
    ///   the current guess is kept and `GuessRejected` is raised
    pub fn submit_guess(&mut self) -> Result<Submission> {
        if self.state.is_complete() {
            return Err(EngineError::PuzzleComplete);
        }
        if self.lock.is_held() {
            return Err(EngineError::SubmissionInFlight);
        }
        self.pristine = false;

        let guess = match self.validate_current_guess() {
            Ok(guess) => guess,
            Err(reason) => {
                debug!("rejected guess: {reason}");
                self.publish(&GameEvent::GuessRejected {
                    reason: reason.clone(),
                });
                return Err(reason.into());
            }
        };

        let ticket = self
            .lock
            .acquire(self.epoch)
            .ok_or(EngineError::SubmissionInFlight)?;

        self.state = self.state.with_submission(guess);
        let row = self.state.attempts_used() - 1;
        let feedback = self.state.rows()[row].feedback;
        let status = self.state.status();
        debug!("row {row}: {}", feedback.to_emoji());

        self.persist();
        self.publish(&GameEvent::StateChanged);
        self.publish(&GameEvent::AnswerSubmitted { row });
        if status != Status::Active {
            info!("puzzle finished: {status:?} after {} guesses", row + 1);
            self.publish(&GameEvent::Completed { status });
        }

        Ok(Submission {
            row,
            feedback,
            status,
            ticket,
        })
    }

    /// Route a key event: `Enter` submits, anything else edits
    ///
    /// Returns the submission when `Enter` produced a new row.
    ///
    /// # Errors
    /// Propagates [`Game::submit_guess`] errors for `Enter`.
    pub fn handle_key(&mut self, key: KeyInput) -> Result<Option<Submission>> {
        match key {
            KeyInput::Enter => self.submit_guess().map(Some),
            other => {
                self.edit_current_guess(other);
                Ok(None)
            }
        }
    }

    /// Start over with a new secret
    ///
    /// Clears history, releases any in-flight submission, and advances the epoch so
    /// effects scheduled for the old puzzle are discarded.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.lock.clear();
        self.pristine = false;

        let secret = self.dictionary.pick_secret_answer(&mut self.rng);
        self.state = PuzzleState::fresh(secret);
        info!("new puzzle (epoch {})", self.epoch);

        self.persist();
        self.publish(&GameEvent::StateChanged);
    }

    /// Release the lock taken by a submission
    ///
    /// Tickets issued before a reset are ignored. Returns whether the lock was released.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket.epoch() != self.epoch {
            return false;
        }
        self.lock.release(ticket)
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        self.bus.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Current puzzle generation; bumped by every reset
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True while a submission is unsettled
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.lock.is_held()
    }

    /// False once storage failed and the session continues in memory only
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The resumable subset of the current state
    #[must_use]
    pub fn saved_game(&self) -> SavedGame {
        SavedGame {
            secret_answer: self.state.secret().text().to_string(),
            submitted_guesses: self
                .state
                .submitted_guesses()
                .map(|w| w.text().to_string())
                .collect(),
        }
    }

    fn validate_current_guess(&self) -> std::result::Result<Word, GuessRejection> {
        let current = self.state.current_guess();
        if current.len() != WORD_LENGTH {
            return Err(GuessRejection::Incomplete { len: current.len() });
        }

        match Word::new(current) {
            Ok(word) if self.dictionary.contains(&word) => Ok(word),
            _ => Err(GuessRejection::NotInWordList {
                word: current.to_string(),
            }),
        }
    }

    fn replay_record(&self, record: &SavedGame) -> Result<PuzzleState> {
        let secret = Word::new(record.secret_answer.as_str()).map_err(|e| {
            EngineError::MalformedPersistedState(format!(
                "secret '{}': {e}",
                record.secret_answer
            ))
        })?;

        let guesses = record
            .submitted_guesses
            .iter()
            .map(|text| match Word::new(text.as_str()) {
                Ok(word) if self.dictionary.contains(&word) => Ok(word),
                _ => Err(EngineError::MalformedPersistedState(format!(
                    "guess '{text}' is not in the word list"
                ))),
            })
            .collect::<Result<Vec<Word>>>()?;

        PuzzleState::replay(secret, &guesses)
    }

    fn load_saved(&self) -> Result<Option<SavedGame>> {
        match &self.storage {
            Some(storage) => Ok(storage.load()?),
            None => Ok(None),
        }
    }

    fn persist(&mut self) {
        let record = self.saved_game();
        if let Some(storage) = self.storage.as_mut()
            && let Err(e) = storage.save(&record)
        {
            warn!("failed to save game ({e}); continuing without saving");
            self.storage = None;
        }
    }

    fn publish(&mut self, event: &GameEvent) {
        self.bus.publish(event, &self.state);
    }
}

impl std::fmt::Debug for Game<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("epoch", &self.epoch)
            .field("persistent", &self.storage.is_some())
            .field("busy", &self.lock.is_held())
            .finish_non_exhaustive()
    }
}
