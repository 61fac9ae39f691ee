//! Text console over any reader and writer

use super::{Console, GameEvent};
use crate::output::formatters::render_event;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A [`Console`] reading lines from `R` and writing text to `W`
pub struct Terminal<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output
    #[must_use]
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub const fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Consume the console and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_guess(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // Only the line terminator is stripped; other whitespace is part of the guess
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn show(&mut self, event: &GameEvent) -> io::Result<()> {
        write!(self.output, "{}", render_event(event, self.color))?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<&[u8]>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes()), Vec::new(), false)
    }

    #[test]
    fn read_guess_strips_line_terminators() {
        let mut console = terminal("0123\n4567\r\n8012");
        assert_eq!(console.read_guess().unwrap().as_deref(), Some("0123"));
        assert_eq!(console.read_guess().unwrap().as_deref(), Some("4567"));
        assert_eq!(console.read_guess().unwrap().as_deref(), Some("8012"));
        assert_eq!(console.read_guess().unwrap(), None);
    }

    #[test]
    fn read_guess_keeps_blank_lines() {
        let mut console = terminal("\n  \n");
        assert_eq!(console.read_guess().unwrap().as_deref(), Some(""));
        assert_eq!(console.read_guess().unwrap().as_deref(), Some("  "));
        assert_eq!(console.read_guess().unwrap(), None);
    }

    #[test]
    fn show_writes_rendered_events() {
        let mut console = terminal("");
        console.show(&GameEvent::RoundStart { round: 3 }).unwrap();
        console.show(&GameEvent::Scored(Score::new(1, 2))).unwrap();

        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(
            text,
            "---\nRound 3\n>Well placed pieces: 1\nMisplaced pieces: 2\n"
        );
    }
}
