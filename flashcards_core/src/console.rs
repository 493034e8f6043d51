//! Line-oriented terminal I/O that mirrors everything into the transcript.

use crate::{Error, Result, Transcript};
use std::io::{BufRead, Write};

/// Reader/writer pair plus the transcript of everything that passed through
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Print a message and record it
    pub fn say(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        self.transcript.record(message);
        Ok(())
    }

    /// Read one trimmed line and record it.
    ///
    /// Fails with [`Error::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }

        let line = buf.trim().to_string();
        self.transcript.record(line.clone());
        Ok(line)
    }

    /// Print a prompt and read the reply
    pub fn prompt(&mut self, message: impl Into<String>) -> Result<String> {
        self.say(message)?;
        self.read_line()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
