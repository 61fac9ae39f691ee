//! Command-line arguments
//!
//! The game is forgiving about its arguments: unknown flags and stray words are
//! skipped, and a numeric flag whose value does not parse is dropped so the
//! default applies. [`sanitize_args`] applies those rules before clap sees the
//! arguments, so clap only ever parses well-formed input.

use crate::core::{Code, CodeError};
use crate::game::{DEFAULT_MAX_ATTEMPTS, GameSettings};
use clap::Parser;
use std::ffi::OsString;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "mastermind",
    about = "Break a secret code of four distinct digits (0-8) within a limited number of attempts",
    version,
    author,
    args_override_self = true
)]
pub struct Cli {
    /// Secret code to play against instead of a random one
    #[arg(
        short = 'c',
        long = "code",
        value_name = "CODE",
        allow_hyphen_values = true
    )]
    pub code: Option<String>,

    /// Maximum number of scored guesses
    #[arg(
        short = 't',
        long = "attempts",
        value_name = "ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS
    )]
    pub attempts: u32,

    /// Seed for the secret code generator
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse the process arguments, ignoring anything malformed
    #[must_use]
    pub fn parse_lenient() -> Self {
        Self::parse_from(sanitize_args(std::env::args_os()))
    }

    /// Turn the parsed arguments into game settings
    ///
    /// An empty `-c` value counts as no code at all.
    ///
    /// # Errors
    ///
    /// Returns `CodeError` if a non-empty `-c` value is not a valid code.
    pub fn into_settings(self) -> Result<GameSettings, CodeError> {
        let secret = match self.code.as_deref() {
            None | Some("") => None,
            Some(text) => Some(Code::new(text)?),
        };

        let settings = GameSettings::new(secret, self.attempts);
        Ok(match self.seed {
            Some(seed) => settings.with_seed(seed),
            None => settings,
        })
    }
}

/// Keep only the arguments the game understands
///
/// The first item is the program name and is always kept.
/// - `-c`/`--code` takes the next argument, whatever it is
/// - `-t`/`--attempts` takes the next argument only if it is an integer;
///   negative values become 0, otherwise the flag alone is dropped and the
///   next argument is considered on its own
/// - `--seed` likewise, with a `u64` value
/// - help, version and `--no-color` pass through
/// - everything else is dropped
pub fn sanitize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut kept = Vec::with_capacity(args.len());
    let mut rest = args.into_iter();

    if let Some(program) = rest.next() {
        kept.push(program);
    }

    let mut rest = rest.peekable();
    while let Some(arg) = rest.next() {
        let flag = arg.to_string_lossy().into_owned();
        match flag.as_str() {
            "-c" | "--code" => {
                if let Some(value) = rest.next() {
                    kept.push(arg);
                    kept.push(value);
                }
            }
            "-t" | "--attempts" => {
                let attempts = rest
                    .peek()
                    .and_then(|value| value.to_str())
                    .and_then(|value| value.parse::<i32>().ok());
                if let Some(attempts) = attempts {
                    rest.next();
                    kept.push(arg);
                    kept.push(attempts.max(0).to_string().into());
                } else {
                    debug!("Ignoring {flag} without an integer value");
                }
            }
            "--seed" => {
                let seed = rest
                    .peek()
                    .and_then(|value| value.to_str())
                    .and_then(|value| value.parse::<u64>().ok());
                if let Some(seed) = seed {
                    rest.next();
                    kept.push(arg);
                    kept.push(seed.to_string().into());
                } else {
                    debug!("Ignoring --seed without a numeric value");
                }
            }
            "-h" | "--help" | "-V" | "--version" | "--no-color" => kept.push(arg),
            _ => debug!(argument = %flag, "Ignoring unrecognised argument"),
        }
    }

    kept
}
