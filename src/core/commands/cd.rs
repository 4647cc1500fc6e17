use std::env;
use std::io::Write;
use std::path::PathBuf;

use super::{Command, CommandError, Invocation, Outcome};
use crate::core::user;

/// Changes to the first argument taken literally, or to the home directory
/// when there is none. Extra arguments are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn change_directory(&self, args: &[String]) -> Result<(), CommandError> {
        let target = match args.first() {
            Some(path) => PathBuf::from(path),
            None => user::home_dir().map_err(CommandError::HomeDir)?,
        };

        if let Err(source) = env::set_current_dir(&target) {
            return Err(CommandError::ChangeDir {
                path: target,
                source,
            });
        }

        tracing::debug!(path = %target.display(), "changed directory");
        Ok(())
    }
}

impl Command for CdCommand {
    fn execute<W: Write>(&self, invocation: Invocation<'_, W>) -> Result<Outcome, CommandError> {
        self.change_directory(invocation.line.args())?;
        Ok(Outcome::Continue)
    }
}
