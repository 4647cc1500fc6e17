use thiserror::Error;

use crate::core::aliases::AliasError;
use crate::core::commands::CommandError;
use crate::core::user::UserError;
use crate::input::ReadError;

/// Everything the shell reports to the user.
///
/// The `Display` output is the line written to standard error, so each
/// variant carries its own label. Alias syntax errors are printed bare.
/// `Command` shows the default label; the shell substitutes the configured one.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Error reading input: {0}")]
    Read(#[from] ReadError),
    #[error("Error getting current user: {0}")]
    User(#[from] UserError),
    #[error("{0}")]
    Alias(AliasError),
    #[error("Command error: {0}")]
    Command(CommandError),
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Alias(e) => ShellError::Alias(e),
            other => ShellError::Command(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessError;

    #[test]
    fn test_alias_errors_are_unlabelled() {
        let err = ShellError::from(CommandError::Alias(AliasError::MissingSeparator));
        assert_eq!(
            err.to_string(),
            "Invalid alias format. Use: alias name='command'"
        );
    }

    #[test]
    fn test_command_errors_carry_label() {
        let err = ShellError::from(CommandError::Process(ProcessError::Spawn {
            command: "nonexistent-binary-xyz".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }));
        let message = err.to_string();
        assert!(message.starts_with("Command error: "));
        assert!(message.contains("nonexistent-binary-xyz"));
    }

    #[test]
    fn test_read_error_label() {
        let err = ShellError::from(ReadError::Eof);
        assert_eq!(err.to_string(), "Error reading input: EOF");
    }
}
