//! Mastermind feedback calculation
//!
//! A score counts the well-placed symbols (right symbol, right position) and the
//! misplaced ones (present in the secret, but somewhere else).

use super::code::{CODE_LENGTH, Code, CodeError};
use rustc_hash::FxHashMap;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    well_placed: usize,
    misplaced: usize,
}

impl Score {
    /// Every symbol in the right place
    pub const PERFECT: Self = Self {
        well_placed: CODE_LENGTH,
        misplaced: 0,
    };

    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(well_placed: usize, misplaced: usize) -> Self {
        Self {
            well_placed,
            misplaced,
        }
    }

    /// Score `guess` against `secret`
    ///
    /// Both codes always have [`CODE_LENGTH`] symbols, so this cannot fail.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::new("0123").unwrap();
    /// let guess = Code::new("0213").unwrap();
    ///
    /// // 0 and 3 are in place, 1 and 2 are swapped
    /// assert_eq!(Score::of(&secret, &guess), Score::new(2, 2));
    /// ```
    #[must_use]
    pub fn of(secret: &Code, guess: &Code) -> Self {
        Self::tally(secret.symbols(), guess.symbols())
    }

    /// Score arbitrary symbol sequences
    ///
    /// Symbols may repeat; each symbol in the secret is matched at most once.
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and set those positions aside
    /// 2. Count the leftover symbols of secret and guess separately
    /// 3. Each leftover guess symbol contributes `min(guess count, secret count)`
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the sequences differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Score;
    ///
    /// // Ends match; the swapped 1 and 2 are misplaced
    /// let score = Score::calculate(b"1213", b"1123").unwrap();
    /// assert_eq!(score, Score::new(2, 2));
    ///
    /// assert!(Score::calculate(b"012", b"0123").is_err());
    /// ```
    pub fn calculate(secret: &[u8], guess: &[u8]) -> Result<Self, CodeError> {
        if secret.len() != guess.len() {
            return Err(CodeError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }
        Ok(Self::tally(secret, guess))
    }

    fn tally(secret: &[u8], guess: &[u8]) -> Self {
        let mut well_placed = 0;
        let mut secret_left: FxHashMap<u8, usize> = FxHashMap::default();
        let mut guess_left: FxHashMap<u8, usize> = FxHashMap::default();

        for (&s, &g) in secret.iter().zip(guess) {
            if s == g {
                well_placed += 1;
            } else {
                *secret_left.entry(s).or_insert(0) += 1;
                *guess_left.entry(g).or_insert(0) += 1;
            }
        }

        let misplaced = guess_left
            .iter()
            .map(|(symbol, &count)| count.min(secret_left.get(symbol).copied().unwrap_or(0)))
            .sum();

        Self {
            well_placed,
            misplaced,
        }
    }

    /// Number of symbols in the right position
    #[inline]
    #[must_use]
    pub const fn well_placed(self) -> usize {
        self.well_placed
    }

    /// Number of symbols present in the secret but in another position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> usize {
        self.misplaced
    }

    /// Check if every symbol of a full-length code is in place
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.well_placed == CODE_LENGTH && self.misplaced == 0
    }
}
