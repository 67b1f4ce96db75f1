//! Game engine
//!
//! Puzzle state, the state machine that drives it, and the plumbing front ends use to
//! follow along: events, the submission lock, and epoch-tagged deferred effects.

pub mod deferred;
pub mod events;
pub mod input;
pub mod lock;
pub mod machine;
pub mod state;

pub use deferred::DeferredQueue;
pub use events::{EventBus, GameEvent, Observer, SubscriptionId};
pub use input::KeyInput;
pub use lock::{DEFAULT_SETTLE_TIMEOUT, SettleTicket, SubmissionLock};
pub use machine::{Game, Resumed, Submission};
pub use state::{MAX_ATTEMPTS, PuzzleState, Row, Status};
