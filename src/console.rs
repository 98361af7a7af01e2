//! Line-oriented dialogue with the user.
//!
//! Every line printed and every line read goes through here so it can be
//! recorded in the collection's transcript.

use crate::error::{FlashcardError, Result};
use crate::models::Collection;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line and records it.
    pub fn say(&mut self, cards: &mut Collection, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        cards.append_log_line(text);
        Ok(())
    }

    /// Prints a result message followed by an empty line.
    pub fn report(&mut self, cards: &mut Collection, text: &str) -> Result<()> {
        writeln!(self.output, "{text}\n")?;
        self.output.flush()?;
        cards.append_log_line(format!("{text}\n"));
        Ok(())
    }

    /// Prints an empty line without recording it.
    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Reads one line without its line terminator and records it as typed.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn read_line(&mut self, cards: &mut Collection) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(FlashcardError::EndOfInput);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        cards.append_log_line(line.clone());
        Ok(line)
    }

    /// Prints a prompt and reads the answer to it.
    pub fn ask(&mut self, cards: &mut Collection, prompt: &str) -> Result<String> {
        self.say(cards, prompt)?;
        self.read_line(cards)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
