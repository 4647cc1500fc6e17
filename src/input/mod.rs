use rustyline::error::ReadlineError;
use thiserror::Error;

mod editor;
mod stdin;

pub use editor::EditorReader;
pub use stdin::StdinReader;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("EOF")]
    Eof,
    #[error("interrupted")]
    Interrupted,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Editor(ReadlineError),
}

impl From<ReadlineError> for ReadError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Eof => ReadError::Eof,
            ReadlineError::Interrupted => ReadError::Interrupted,
            ReadlineError::Io(e) => ReadError::Io(e),
            other => ReadError::Editor(other),
        }
    }
}

/// A source of command lines.
pub trait LineReader {
    /// Shows `prompt` and blocks until one newline-terminated line is
    /// available. The newline is not included in the result.
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError>;
}
