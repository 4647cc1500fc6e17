use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{LineReader, ReadError};

/// Reads lines from any buffered source, writing the prompt to `output`.
///
/// A trailing line without a newline is reported as end of input and
/// discarded.
pub struct StdinReader<R, W> {
    input: R,
    output: W,
}

impl StdinReader<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> LineReader for StdinReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        match line.strip_suffix('\n') {
            Some(content) => Ok(content.to_string()),
            None => {
                tracing::trace!(discarded = line.len(), "input exhausted");
                Err(ReadError::Eof)
            }
        }
    }
}
