//! Mastermind code representation
//!
//! A Code is an ordered sequence of four pairwise-distinct symbols drawn from the
//! digits `0` to `8`. Guesses and secrets share this type.

use std::fmt;
use std::str::FromStr;

/// Number of symbols in every code
pub const CODE_LENGTH: usize = 4;

/// The nine symbols a code may use, in ascending order
pub const ALPHABET: [u8; 9] = *b"012345678";

/// A four-symbol code with distinct symbols
///
/// Immutable once built. The only ways to obtain one are [`Code::new`] (or
/// [`str::parse`]) and [`CodeGenerator`](super::CodeGenerator), so every value
/// satisfies the alphabet and distinctness rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: [u8; CODE_LENGTH],
}

/// Error type for rejected codes and mismatched scoring inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The input did not have exactly [`CODE_LENGTH`] characters
    InvalidLength(usize),
    /// A character outside `0`-`8`
    SymbolOutOfRange(char),
    /// A symbol appeared more than once
    RepeatedSymbol(char),
    /// Secret and guess handed to the scorer differ in length
    LengthMismatch { secret: usize, guess: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} symbols, got {len}")
            }
            Self::SymbolOutOfRange(ch) => {
                write!(f, "Symbol {ch:?} is not a digit between 0 and 8")
            }
            Self::RepeatedSymbol(ch) => write!(f, "Symbol {ch:?} is used more than once"),
            Self::LengthMismatch { secret, guess } => write!(
                f,
                "Secret has {secret} symbols but guess has {guess}; they must match"
            ),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse and validate a code
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The input is not exactly 4 characters (this includes the empty string)
    /// - Any character lies outside `0`-`8`
    /// - Any character repeats
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new("0123").unwrap();
    /// assert_eq!(code.to_string(), "0123");
    ///
    /// assert!(Code::new("1123").is_err());
    /// assert!(Code::new("0129").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        if let Some(ch) = text.chars().find(|ch| !('0'..='8').contains(ch)) {
            return Err(CodeError::SymbolOutOfRange(ch));
        }

        // Every character is an ASCII digit now, so bytes and chars line up
        let mut symbols = [0u8; CODE_LENGTH];
        for (i, &byte) in text.as_bytes().iter().enumerate() {
            if symbols[..i].contains(&byte) {
                return Err(CodeError::RepeatedSymbol(char::from(byte)));
            }
            symbols[i] = byte;
        }

        Ok(Self { symbols })
    }

    /// Build a code from symbols already known to be valid
    ///
    /// # Panics
    /// Panics in debug mode if a symbol is outside the alphabet or repeated
    pub(crate) fn from_symbols_unchecked(symbols: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(
            symbols.iter().all(|s| ALPHABET.contains(s)),
            "symbols must come from the alphabet"
        );
        debug_assert!(
            symbols
                .iter()
                .enumerate()
                .all(|(i, s)| !symbols[..i].contains(s)),
            "symbols must be distinct"
        );
        Self { symbols }
    }

    /// Get the code's symbols as ASCII bytes
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.symbols
    }

    /// Get the symbol at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.symbols[position]
    }
}

/// Check a player's guess against the code rules
///
/// A guess is valid when it is non-empty, exactly four characters long, uses
/// only `0`-`8`, and repeats no character.
#[must_use]
pub fn is_valid_guess(guess: &str) -> bool {
    Code::new(guess).is_ok()
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", char::from(symbol))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("0123").unwrap();
        assert_eq!(code.symbols(), b"0123");
        assert_eq!(code.to_string(), "0123");

        let code = Code::new("8765").unwrap();
        assert_eq!(code.to_string(), "8765");
    }

    #[test]
    fn code_creation_invalid_length() {
        assert!(matches!(Code::new(""), Err(CodeError::InvalidLength(0))));
        assert!(matches!(Code::new("012"), Err(CodeError::InvalidLength(3))));
        assert!(matches!(
            Code::new("01234"),
            Err(CodeError::InvalidLength(5))
        ));
        // Length counts characters, not bytes
        assert!(matches!(Code::new("01é"), Err(CodeError::InvalidLength(3))));
    }

    #[test]
    fn code_creation_out_of_range() {
        assert!(matches!(
            Code::new("0129"),
            Err(CodeError::SymbolOutOfRange('9'))
        ));
        assert!(matches!(
            Code::new("11ab"),
            Err(CodeError::SymbolOutOfRange('a'))
        ));
        assert!(matches!(
            Code::new("012 "),
            Err(CodeError::SymbolOutOfRange(' '))
        ));
        assert!(matches!(
            Code::new("-123"),
            Err(CodeError::SymbolOutOfRange('-'))
        ));
    }

    #[test]
    fn code_creation_repeated_symbol() {
        assert!(matches!(
            Code::new("1123"),
            Err(CodeError::RepeatedSymbol('1'))
        ));
        assert!(matches!(
            Code::new("0120"),
            Err(CodeError::RepeatedSymbol('0'))
        ));
        assert!(matches!(
            Code::new("8888"),
            Err(CodeError::RepeatedSymbol('8'))
        ));
    }

    #[test]
    fn code_symbol_at() {
        let code = Code::new("3702").unwrap();
        assert_eq!(code.symbol_at(0), b'3');
        assert_eq!(code.symbol_at(1), b'7');
        assert_eq!(code.symbol_at(3), b'2');
    }

    #[test]
    fn is_valid_guess_rules() {
        assert!(is_valid_guess("0123"));
        assert!(is_valid_guess("8076"));

        assert!(!is_valid_guess(""));
        assert!(!is_valid_guess("012"));
        assert!(!is_valid_guess("01234"));
        assert!(!is_valid_guess("0129"));
        assert!(!is_valid_guess("1123"));
        assert!(!is_valid_guess("11ab"));
        assert!(!is_valid_guess("0123\n"));
    }

    #[test]
    fn code_parse_matches_new() {
        let parsed: Code = "4567".parse().unwrap();
        assert_eq!(parsed, Code::new("4567").unwrap());
        assert!("45".parse::<Code>().is_err());
    }

    #[test]
    fn code_error_display() {
        assert_eq!(
            CodeError::InvalidLength(2).to_string(),
            "Code must be exactly 4 symbols, got 2"
        );
        assert_eq!(
            CodeError::RepeatedSymbol('1').to_string(),
            "Symbol '1' is used more than once"
        );
    }
}
