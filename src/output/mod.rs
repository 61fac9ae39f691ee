//! Terminal output formatting
//!
//! The fixed message texts of the game and their optional colouring.

pub mod formatters;

pub use formatters::render_event;
