use std::io::Write;

use super::{Command, CommandError, Invocation, Outcome};

/// Asks the loop to stop with status 0. Arguments are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute<W: Write>(&self, _invocation: Invocation<'_, W>) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit(0))
    }
}
