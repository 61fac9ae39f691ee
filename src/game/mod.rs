//! Game orchestration
//!
//! Settings and the turn-by-turn session state machine.

mod session;
mod settings;

pub use session::{GameSession, Outcome, SessionState, Turn};
pub use settings::{DEFAULT_MAX_ATTEMPTS, GameSettings};
