//! Interactive game on the terminal

use crate::console::Terminal;
use crate::game::{GameSession, GameSettings, Outcome};
use std::io;
use tracing::info;

/// Play one game on standard input and output
///
/// # Errors
///
/// Returns an error if reading a guess or writing to the terminal fails.
pub fn run_play(settings: GameSettings, color: bool) -> io::Result<Outcome> {
    let mut session = GameSession::new(settings);
    let mut terminal = Terminal::stdio(color);

    let outcome = session.play(&mut terminal)?;
    info!(?outcome, "Game finished");
    Ok(outcome)
}
