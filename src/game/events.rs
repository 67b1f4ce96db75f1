//! State-change notifications
//!
//! Observers register with an [`EventBus`] and receive every [`GameEvent`] together with
//! the state snapshot current at the time it was raised.

use super::state::{PuzzleState, Status};
use crate::error::GuessRejection;

/// Something an observer may want to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Any change to the state: a typed letter, a submission, a reset
    StateChanged,
    /// A row was finalized; `row` is its zero-based index
    AnswerSubmitted { row: usize },
    /// A guess was refused; the state is unchanged
    GuessRejected { reason: GuessRejection },
    /// History was replayed from storage; `rows` rows already carry feedback
    RestoredFromHistory { rows: usize },
    /// The puzzle reached a terminal status, raised after the final `AnswerSubmitted`
    Completed { status: Status },
}

/// Receiver of game events
pub trait Observer {
    fn notify(&mut self, event: &GameEvent, state: &PuzzleState);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent, &PuzzleState),
{
    fn notify(&mut self, event: &GameEvent, state: &PuzzleState) {
        self(event, state);
    }
}

/// Handle for removing an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer registry
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn Observer>)>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it sees events in registration order relative to others
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn publish(&mut self, event: &GameEvent, state: &PuzzleState) {
        for (_, observer) in &mut self.observers {
            observer.notify(event, state);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}
