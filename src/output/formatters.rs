//! Console message texts

use crate::console::GameEvent;
use colored::{Color, Colorize};

pub const WELCOME: &str = "Can you break the code? Enter a valid guess.";
pub const ROUND_SEPARATOR: &str = "---";
pub const PROMPT: &str = ">";
pub const INVALID_INPUT: &str = "Wrong input!";
pub const WIN: &str = "Congratz! You did it!";

/// Render an event as the exact text shown to the player
///
/// Round headers end with the prompt and no newline; every other event ends
/// with a newline. With `color` set, the invalid, win and game-over lines are
/// highlighted.
#[must_use]
pub fn render_event(event: &GameEvent, color: bool) -> String {
    match event {
        GameEvent::Welcome => format!("{WELCOME}\n"),
        GameEvent::RoundStart { round } => {
            format!("{ROUND_SEPARATOR}\nRound {round}\n{PROMPT}")
        }
        GameEvent::InvalidGuess => {
            format!("{}\n", highlight(INVALID_INPUT, Color::Yellow, color))
        }
        GameEvent::Scored(score) => format!(
            "Well placed pieces: {}\nMisplaced pieces: {}\n",
            score.well_placed(),
            score.misplaced()
        ),
        GameEvent::Won => format!("{}\n", highlight(WIN, Color::BrightGreen, color)),
        GameEvent::GameOver { secret } => {
            let line = format!("Game over! The secret code was: {secret}");
            format!("{}\n", highlight(&line, Color::Red, color))
        }
    }
}

fn highlight(text: &str, tint: Color, enabled: bool) -> String {
    if enabled {
        text.color(tint).bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Score};

    #[test]
    fn render_plain_messages() {
        assert_eq!(
            render_event(&GameEvent::Welcome, false),
            "Can you break the code? Enter a valid guess.\n"
        );
        assert_eq!(
            render_event(&GameEvent::RoundStart { round: 0 }, false),
            "---\nRound 0\n>"
        );
        assert_eq!(render_event(&GameEvent::InvalidGuess, false), "Wrong input!\n");
        assert_eq!(
            render_event(&GameEvent::Won, false),
            "Congratz! You did it!\n"
        );
    }

    #[test]
    fn render_score_on_two_lines() {
        let text = render_event(&GameEvent::Scored(Score::new(2, 1)), false);
        assert_eq!(text, "Well placed pieces: 2\nMisplaced pieces: 1\n");
    }

    #[test]
    fn render_game_over_reveals_secret() {
        let secret = Code::new("0123").unwrap();
        assert_eq!(
            render_event(&GameEvent::GameOver { secret }, false),
            "Game over! The secret code was: 0123\n"
        );
    }

    #[test]
    fn colored_messages_keep_their_text() {
        colored::control::set_override(true);
        let text = render_event(&GameEvent::Won, true);
        assert!(text.contains(WIN));
        assert!(text.starts_with("\u{1b}["));
        // Round headers and scores are never styled
        assert_eq!(
            render_event(&GameEvent::RoundStart { round: 1 }, true),
            "---\nRound 1\n>"
        );
    }
}
