//! Mastermind
//!
//! A command-line Mastermind game: break a secret code of four distinct digits
//! (`0`-`8`) from well-placed and misplaced feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Score};
//!
//! let secret = Code::new("0123").unwrap();
//! let guess = Code::new("0213").unwrap();
//!
//! let score = Score::of(&secret, &guess);
//! assert_eq!(score.well_placed(), 2);
//! assert_eq!(score.misplaced(), 2);
//! ```

// Core domain types
pub mod core;

// Settings and turn loop
pub mod game;

// Input and output collaborators
pub mod console;

// Command-line arguments
pub mod cli;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
