//! TUI application state and logic
//!
//! The engine state is updated at once on every key; what the player sees catches up over
//! time. Submitted rows are revealed cell by cell, the keyboard colours change only after
//! a row is fully revealed, and only then is the submission settled so the next guess can
//! be typed. All timed effects go through a [`DeferredQueue`] keyed by the game epoch, so a
//! reset throws away everything still pending for the old puzzle.

use crate::core::{KeyStatus, WORD_LENGTH};
use crate::error::EngineError;
use crate::game::{
    DeferredQueue, Game, GameEvent, KeyInput, MAX_ATTEMPTS, PuzzleState, Resumed, SettleTicket,
    Status,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Delay between revealing consecutive cells of a submitted row
pub const REVEAL_STEP: Duration = Duration::from_millis(250);
/// Delay between cells when replaying restored history
pub const RESTORE_STEP: Duration = Duration::from_millis(120);
/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);
/// Pause after the final reveal before the game-over panel appears
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(1500);
/// Input poll interval; also the animation frame time
pub const TICK: Duration = Duration::from_millis(33);

const MAX_MESSAGES: usize = 5;

/// A timed change to what is on screen
#[derive(Debug)]
enum Effect {
    RevealCell { row: usize, col: usize },
    RefreshKeyboard,
    Settle(SettleTicket),
    EndShake,
    ShowGameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    game: Game<'a>,
    inbox: Rc<RefCell<Vec<GameEvent>>>,
    effects: DeferredQueue<Effect>,
    /// Cells revealed so far, per row
    revealed: [usize; MAX_ATTEMPTS],
    /// Key colours as currently displayed; lags the engine until a reveal finishes
    keyboard: KeyStatus,
    shaking: bool,
    game_over: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(mut game: Game<'a>) -> Self {
        let inbox = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&inbox);
        game.subscribe(move |event: &GameEvent, _: &PuzzleState| {
            sink.borrow_mut().push(event.clone());
        });

        Self {
            game,
            inbox,
            effects: DeferredQueue::new(),
            revealed: [0; MAX_ATTEMPTS],
            keyboard: KeyStatus::new(),
            shaking: false,
            game_over: false,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    /// Load the saved puzzle, if any, and schedule its replay
    ///
    /// # Errors
    /// Fails only if input was applied before starting.
    pub fn start(&mut self, now: Instant) -> Result<Resumed, EngineError> {
        let resumed = self.game.resume()?;
        match resumed {
            Resumed::Restored { rows } => self.add_message(
                &format!("Welcome back! {rows} of {MAX_ATTEMPTS} guesses used."),
                MessageStyle::Info,
            ),
            Resumed::Fresh => self.add_message(
                "Guess the five-letter word. Ctrl-R: new puzzle, Esc: quit.",
                MessageStyle::Info,
            ),
        }
        if !self.game.is_persistent() {
            self.add_message("Progress will not be saved.", MessageStyle::Error);
        }

        self.process_events(now);
        Ok(resumed)
    }

    /// Feed one logical key to the engine
    ///
    /// Keys are dropped while a rejected row is shaking.
    pub fn press(&mut self, key: KeyInput, now: Instant) {
        if self.shaking {
            debug!("ignoring {key:?} during shake");
            return;
        }
        let result = self.game.handle_key(key);
        self.process_events(now);

        match result {
            Ok(Some(submission)) => {
                // Queued after the keyboard refresh for the same instant, so it runs last
                let done = now + reveal_duration(REVEAL_STEP);
                let epoch = submission.ticket.epoch();
                self.effects
                    .schedule_at(epoch, done, Effect::Settle(submission.ticket));
            }
            Ok(None) | Err(EngineError::SubmissionInFlight | EngineError::InvalidGuess(_)) => {}
            Err(EngineError::PuzzleComplete) => {
                self.add_message("Puzzle over. Ctrl-R for a new one.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Abandon the current puzzle and start a new one
    pub fn reset(&mut self, now: Instant) {
        self.game.reset();
        self.revealed = [0; MAX_ATTEMPTS];
        self.keyboard = KeyStatus::new();
        self.shaking = false;
        self.game_over = false;
        self.messages.clear();
        self.add_message("New puzzle started!", MessageStyle::Info);
        self.process_events(now);
    }

    /// Run every effect due by `now`
    pub fn tick(&mut self, now: Instant) {
        for effect in self.effects.drain_due(self.game.epoch(), now) {
            match effect {
                Effect::RevealCell { row, col } => {
                    self.revealed[row] = self.revealed[row].max(col + 1);
                }
                Effect::RefreshKeyboard => {
                    self.keyboard = self.game.state().key_status().clone();
                }
                Effect::Settle(ticket) => {
                    if !self.game.settle(ticket) {
                        debug!("submission already released");
                    }
                }
                Effect::EndShake => self.shaking = false,
                Effect::ShowGameOver => self.game_over = true,
            }
        }
    }

    /// Route a terminal key event
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reset(now),
            KeyCode::Enter => self.press(KeyInput::Enter, now),
            KeyCode::Backspace => self.press(KeyInput::Delete, now),
            KeyCode::Char(c) if !ctrl => self.press(KeyInput::Letter(c), now),
            _ => {}
        }
    }

    fn process_events(&mut self, now: Instant) {
        let events: Vec<GameEvent> = self.inbox.borrow_mut().drain(..).collect();
        let epoch = self.game.epoch();

        for event in events {
            match event {
                GameEvent::StateChanged => {}
                GameEvent::AnswerSubmitted { row } => {
                    for col in 0..WORD_LENGTH {
                        let due = now + cell_delay(REVEAL_STEP, col);
                        self.effects
                            .schedule_at(epoch, due, Effect::RevealCell { row, col });
                    }
                    let done = now + reveal_duration(REVEAL_STEP);
                    self.effects.schedule_at(epoch, done, Effect::RefreshKeyboard);
                }
                GameEvent::GuessRejected { reason } => {
                    self.add_message(&capitalize(&reason.to_string()), MessageStyle::Error);
                    self.shaking = true;
                    self.effects
                        .schedule_after(epoch, now, SHAKE_DURATION, Effect::EndShake);
                }
                GameEvent::RestoredFromHistory { rows } => {
                    let mut due = now;
                    for row in 0..rows {
                        for col in 0..WORD_LENGTH {
                            self.effects
                                .schedule_at(epoch, due, Effect::RevealCell { row, col });
                            due += RESTORE_STEP;
                        }
                    }
                    self.effects.schedule_at(epoch, due, Effect::RefreshKeyboard);
                    if self.game.state().is_complete() {
                        self.effects
                            .schedule_at(epoch, due + GAME_OVER_DELAY, Effect::ShowGameOver);
                    }
                }
                GameEvent::Completed { status } => {
                    let due = now + reveal_duration(REVEAL_STEP) + GAME_OVER_DELAY;
                    self.effects.schedule_at(epoch, due, Effect::ShowGameOver);
                    self.announce(status);
                }
            }
        }
    }

    fn announce(&mut self, status: Status) {
        let state = self.game.state();
        match status {
            Status::Won => {
                let text = format!("Solved in {} of {MAX_ATTEMPTS}!", state.attempts_used());
                self.add_message(&text, MessageStyle::Success);
            }
            Status::Lost => {
                let text = format!("The word was {}.", state.secret().text().to_uppercase());
                self.add_message(&text, MessageStyle::Error);
            }
            Status::Active => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game<'a> {
        &self.game
    }

    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        self.game.state()
    }

    /// Cells of `row` currently showing their colour
    #[must_use]
    pub fn revealed_cells(&self, row: usize) -> usize {
        self.revealed.get(row).copied().unwrap_or(0)
    }

    /// Key colours as displayed
    #[must_use]
    pub const fn keyboard(&self) -> &KeyStatus {
        &self.keyboard
    }

    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shaking
    }

    #[must_use]
    pub const fn is_game_over_visible(&self) -> bool {
        self.game_over
    }

    /// Time until the next scheduled effect, capped at one frame
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.effects
            .next_due(self.game.epoch())
            .map_or(TICK, |due| due.saturating_duration_since(now).min(TICK))
    }
}

fn cell_delay(step: Duration, col: usize) -> Duration {
    step * u32::try_from(col).unwrap_or(u32::MAX)
}

/// Time until a row submitted now is fully revealed
fn reveal_duration(step: Duration) -> Duration {
    cell_delay(step, WORD_LENGTH)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    app.start(Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key, Instant::now());
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
