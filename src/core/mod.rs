//! Core domain types for Mastermind
//!
//! This module contains the code type, the feedback scorer and the secret
//! generator. None of them perform I/O; the generator only touches the
//! randomness source it is given.

mod code;
mod generator;
mod score;

pub use code::{ALPHABET, CODE_LENGTH, Code, CodeError, is_valid_guess};
pub use generator::CodeGenerator;
pub use score::Score;
