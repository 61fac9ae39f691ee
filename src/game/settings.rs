//! Game configuration

use crate::core::{Code, CodeGenerator};

/// Attempts allowed when none are configured
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Configuration for a single game
///
/// With `max_attempts == 0` no round is played: the session starts out lost
/// and reveals the secret immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Secret to play against; generated when `None`
    pub secret: Option<Code>,
    /// Number of scored guesses before the game is lost
    pub max_attempts: u32,
    /// Seed for the code generator, for reproducible games
    pub seed: Option<u64>,
}

impl GameSettings {
    #[must_use]
    pub const fn new(secret: Option<Code>, max_attempts: u32) -> Self {
        Self {
            secret,
            max_attempts,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Return the configured secret, or draw one
    ///
    /// Randomness is only consumed when no secret was configured.
    #[must_use]
    pub fn resolve_secret(&self) -> Code {
        self.secret.unwrap_or_else(|| match self.seed {
            Some(seed) => CodeGenerator::seeded(seed).generate(),
            None => CodeGenerator::from_os_rng().generate(),
        })
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(None, DEFAULT_MAX_ATTEMPTS)
    }
}
