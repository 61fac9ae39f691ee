//! Console collaborators
//!
//! The session never touches stdin or stdout directly. It talks to a [`Console`],
//! which yields one line per request and renders [`GameEvent`]s.

mod terminal;

pub use terminal::Terminal;

use crate::core::{Code, Score};
use std::io;

/// Something the session wants the player to see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Start-of-game invitation
    Welcome,
    /// Round header followed by the input prompt
    RoundStart { round: u32 },
    /// The last guess broke the code rules
    InvalidGuess,
    /// Feedback for a wrong but valid guess
    Scored(Score),
    /// The code was broken
    Won,
    /// Attempts exhausted
    GameOver { secret: Code },
}

/// Line-oriented input source and text sink for a game
pub trait Console {
    /// Read the next guess
    ///
    /// Returns `Ok(None)` once no more input is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn read_guess(&mut self) -> io::Result<Option<String>>;

    /// Present an event to the player
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn show(&mut self, event: &GameEvent) -> io::Result<()>;
}
