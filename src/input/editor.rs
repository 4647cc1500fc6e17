use rustyline::DefaultEditor;

use super::{LineReader, ReadError};

/// Line editing for interactive terminals. Nothing is added to history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, rustyline::error::ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        Ok(self.editor.readline(prompt)?)
    }
}
