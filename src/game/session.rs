//! Turn loop for a single game
//!
//! A [`GameSession`] owns the secret and the round counter. Each submitted guess
//! moves it through the states below:
//!
//! ```text
//! AwaitingInput --invalid guess--> AwaitingInput        (round unchanged)
//! AwaitingInput --secret guessed--> Won
//! AwaitingInput --scored guess----> AwaitingInput       (round + 1)
//!                                   Lost                (once round == max attempts)
//! ```

use crate::console::{Console, GameEvent};
use crate::core::{Code, CodeError, CodeGenerator, Score};
use rand::Rng;
use std::io;
use tracing::{debug, info};

use super::settings::GameSettings;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Won,
    Lost,
}

/// What a single submitted guess did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The guess broke the code rules; nothing changed
    Invalid(CodeError),
    /// The guess was wrong and has been scored
    Scored(Score),
    /// The guess matched the secret
    Won,
    /// The session had already ended; the guess was not looked at
    Closed,
}

/// How a played game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Code broken after `rounds` valid guesses (the winning one included)
    Won { rounds: u32 },
    /// Attempts exhausted
    Lost { secret: Code },
    /// Input ran out during round `round`; the secret was still revealed
    Abandoned { round: u32 },
}

/// A single game of Mastermind
pub struct GameSession {
    secret: Code,
    round: u32,
    settings: GameSettings,
    state: SessionState,
}

impl GameSession {
    /// Start a game, drawing a secret if the settings carry none
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        let secret = settings.resolve_secret();
        Self::with_secret(secret, settings)
    }

    /// Start a game, drawing any missing secret from `generator`
    #[must_use]
    pub fn with_generator<R: Rng>(
        settings: GameSettings,
        generator: &mut CodeGenerator<R>,
    ) -> Self {
        let secret = settings.secret.unwrap_or_else(|| generator.generate());
        Self::with_secret(secret, settings)
    }

    fn with_secret(secret: Code, settings: GameSettings) -> Self {
        let state = if settings.max_attempts == 0 {
            SessionState::Lost
        } else {
            SessionState::AwaitingInput
        };
        debug!(
            max_attempts = settings.max_attempts,
            preset = settings.secret.is_some(),
            "Game session created"
        );
        Self {
            secret,
            round: 0,
            settings,
            state,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Zero-based number of the round awaiting a guess
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.settings.max_attempts
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != SessionState::AwaitingInput
    }

    /// Apply one guess to the session
    ///
    /// Invalid guesses leave the round counter untouched. Only a valid, wrong
    /// guess consumes an attempt.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    /// use mastermind::game::{GameSession, GameSettings, Turn};
    ///
    /// let secret = Code::new("0123").unwrap();
    /// let mut session = GameSession::new(GameSettings::new(Some(secret), 10));
    ///
    /// assert!(matches!(session.submit_guess("11ab"), Turn::Invalid(_)));
    /// assert_eq!(session.round(), 0);
    ///
    /// assert_eq!(session.submit_guess("0213"), Turn::Scored(Score::new(2, 2)));
    /// assert_eq!(session.round(), 1);
    ///
    /// assert_eq!(session.submit_guess("0123"), Turn::Won);
    /// ```
    pub fn submit_guess(&mut self, input: &str) -> Turn {
        if self.is_over() {
            return Turn::Closed;
        }

        let guess = match Code::new(input) {
            Ok(guess) => guess,
            Err(error) => {
                debug!(round = self.round, %error, "Rejected guess");
                return Turn::Invalid(error);
            }
        };

        if guess == self.secret {
            info!(round = self.round, "Code broken");
            self.state = SessionState::Won;
            return Turn::Won;
        }

        let score = Score::of(&self.secret, &guess);
        debug!(
            round = self.round,
            %guess,
            well_placed = score.well_placed(),
            misplaced = score.misplaced(),
            "Scored guess"
        );

        self.round += 1;
        if self.round >= self.settings.max_attempts {
            info!(rounds = self.round, "Attempts exhausted");
            self.state = SessionState::Lost;
        }

        Turn::Scored(score)
    }

    /// Drive the game to completion through a console
    ///
    /// When the console reports end of input the loop stops and, as with
    /// exhausted attempts, the secret is revealed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from or writing to the console fails.
    pub fn play<C: Console>(&mut self, console: &mut C) -> io::Result<Outcome> {
        console.show(&GameEvent::Welcome)?;
        let mut input_closed = false;

        while !self.is_over() {
            console.show(&GameEvent::RoundStart { round: self.round })?;

            let Some(line) = console.read_guess()? else {
                info!(round = self.round, "Input closed, leaving game");
                input_closed = true;
                break;
            };

            match self.submit_guess(&line) {
                Turn::Invalid(_) => console.show(&GameEvent::InvalidGuess)?,
                Turn::Scored(score) => console.show(&GameEvent::Scored(score))?,
                Turn::Won => console.show(&GameEvent::Won)?,
                Turn::Closed => break,
            }
        }

        if self.state == SessionState::Won {
            return Ok(Outcome::Won {
                rounds: self.round + 1,
            });
        }

        console.show(&GameEvent::GameOver {
            secret: self.secret,
        })?;
        if input_closed {
            return Ok(Outcome::Abandoned { round: self.round });
        }
        Ok(Outcome::Lost {
            secret: self.secret,
        })
    }
}
