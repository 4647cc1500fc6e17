use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

mod alias;
mod cd;
mod exit;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use exit::ExitCommand;

use super::aliases::{AliasError, AliasTable};
use super::parser::{parse_line, CommandLine, ParsedLine};
use super::user::UserError;
use crate::process::{ProcessError, ProcessExecutor, ProcessRunner};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Alias(#[from] AliasError),
    #[error("failed to get home directory: {0}")]
    HomeDir(#[source] UserError),
    #[error("cd: {}: {source}", .path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the loop should do after a line has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

/// Everything a builtin may look at or change while it runs.
pub struct Invocation<'a, W> {
    /// The raw line as typed, before tokenization.
    pub input: &'a str,
    pub line: &'a CommandLine,
    pub aliases: &'a mut AliasTable,
    pub out: &'a mut W,
}

pub trait Command {
    fn execute<W: Write>(&self, invocation: Invocation<'_, W>) -> Result<Outcome, CommandError>;
}

/// Commands interpreted by the shell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Alias(AliasCommand),
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alias" => Some(Builtin::Alias(AliasCommand::new())),
            "cd" => Some(Builtin::Cd(CdCommand::new())),
            "exit" => Some(Builtin::Exit(ExitCommand::new())),
            _ => None,
        }
    }
}

impl Command for Builtin {
    fn execute<W: Write>(&self, invocation: Invocation<'_, W>) -> Result<Outcome, CommandError> {
        match self {
            Builtin::Alias(cmd) => cmd.execute(invocation),
            Builtin::Cd(cmd) => cmd.execute(invocation),
            Builtin::Exit(cmd) => cmd.execute(invocation),
        }
    }
}

/// Routes one input line to alias definition, a builtin, or an external
/// program. Owns the session's alias table.
pub struct CommandExecutor<P: ProcessRunner = ProcessExecutor> {
    aliases: AliasTable,
    process_runner: P,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::with_runner(ProcessExecutor::new())
    }
}

impl<P: ProcessRunner> CommandExecutor<P> {
    pub fn with_runner(process_runner: P) -> Self {
        Self {
            aliases: AliasTable::new(),
            process_runner,
        }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn process_runner(&self) -> &P {
        &self.process_runner
    }

    /// Dispatches a raw input line. Confirmation messages go to `out`.
    pub fn execute<W: Write>(&mut self, input: &str, out: &mut W) -> Result<Outcome, CommandError> {
        let ParsedLine::Command(line) = parse_line(input) else {
            return Ok(Outcome::Continue);
        };

        // Checked before resolution so the keyword can never be shadowed.
        if let Some(builtin @ Builtin::Alias(_)) = Builtin::from_name(line.name()) {
            return builtin.execute(Invocation {
                input,
                line: &line,
                aliases: &mut self.aliases,
                out,
            });
        }

        let line = self.aliases.resolve(line);
        let builtin = Builtin::from_name(line.name());
        tracing::debug!(command = line.name(), builtin = ?builtin, "dispatching");

        match builtin {
            // `alias` reached through an alias is just another program name.
            Some(Builtin::Alias(_)) | None => {
                self.process_runner.run(line.name(), line.args())?;
                Ok(Outcome::Continue)
            }
            Some(builtin) => builtin.execute(Invocation {
                input,
                line: &line,
                aliases: &mut self.aliases,
                out,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::cell::RefCell;
    use std::env;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
            let mut call = vec![program.to_string()];
            call.extend(args.iter().cloned());
            self.calls.borrow_mut().push(call);
            Ok(())
        }
    }

    fn setup_test_env() -> CommandExecutor<RecordingRunner> {
        CommandExecutor::with_runner(RecordingRunner::default())
    }

    fn run(executor: &mut CommandExecutor<RecordingRunner>, input: &str) -> Result<Outcome, CommandError> {
        executor.execute(input, &mut std::io::sink())
    }

    fn calls(executor: &CommandExecutor<RecordingRunner>) -> Vec<Vec<String>> {
        executor.process_runner().calls.borrow().clone()
    }

    #[test]
    fn test_builtin_command_detection() {
        assert!(matches!(Builtin::from_name("alias"), Some(Builtin::Alias(_))));
        assert!(matches!(Builtin::from_name("cd"), Some(Builtin::Cd(_))));
        assert!(matches!(Builtin::from_name("exit"), Some(Builtin::Exit(_))));
        assert_eq!(Builtin::from_name("ls"), None);
        assert_eq!(Builtin::from_name(""), None);
        assert_eq!(Builtin::from_name("CD"), None);
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut executor = setup_test_env();
        let mut out = Vec::new();

        for input in ["", "   ", "\t\n"] {
            assert_eq!(executor.execute(input, &mut out).unwrap(), Outcome::Continue);
        }
        assert!(out.is_empty());
        assert!(calls(&executor).is_empty());
    }

    #[test]
    fn test_alias_then_invoke_with_arguments() {
        let mut executor = setup_test_env();
        let mut out = Vec::new();

        executor.execute("alias ll='ls -la'", &mut out).unwrap();
        executor.execute("ll /tmp", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Alias 'll' set to 'ls -la'\n");
        assert_eq!(calls(&executor), vec![vec!["ls", "-la", "/tmp"]]);
    }

    #[test]
    fn test_alias_matches_typed_command() {
        let mut via_alias = setup_test_env();
        run(&mut via_alias, "alias g=\"git log --oneline\"").unwrap();
        run(&mut via_alias, "g -n 3 main").unwrap();

        let mut typed = setup_test_env();
        run(&mut typed, "git log --oneline -n 3 main").unwrap();

        assert_eq!(calls(&via_alias), calls(&typed));
    }

    #[test]
    fn test_redefinition_overwrites() {
        let mut executor = setup_test_env();
        run(&mut executor, "alias ll='ls -la'").unwrap();
        run(&mut executor, "alias ll='ls -1'").unwrap();
        run(&mut executor, "ll").unwrap();

        assert_eq!(calls(&executor), vec![vec!["ls", "-1"]]);
    }

    #[test]
    fn test_malformed_alias_leaves_table_untouched() {
        let mut executor = setup_test_env();
        run(&mut executor, "alias ll='ls -la'").unwrap();

        for input in ["alias", "alias ll", "alias =ls", "alias ll=", "alias ll=''"] {
            let mut out = Vec::new();
            let result = executor.execute(input, &mut out);
            assert!(matches!(result, Err(CommandError::Alias(_))), "{input}");
            assert!(out.is_empty());
        }

        assert_eq!(executor.aliases().len(), 1);
        assert_eq!(executor.aliases().get("ll"), Some("ls -la"));
    }

    #[test]
    fn test_alias_keyword_cannot_be_shadowed() {
        let mut executor = setup_test_env();
        run(&mut executor, "alias alias='echo hijacked'").unwrap();
        run(&mut executor, "alias ll='ls -la'").unwrap();

        assert!(calls(&executor).is_empty());
        assert_eq!(executor.aliases().get("ll"), Some("ls -la"));
    }

    #[test]
    fn test_alias_resolving_to_alias_keyword_runs_externally() {
        let mut executor = setup_test_env();
        run(&mut executor, "alias a=alias").unwrap();
        run(&mut executor, "a x=y").unwrap();

        assert_eq!(calls(&executor), vec![vec!["alias", "x=y"]]);
        assert_eq!(executor.aliases().get("x"), None);
    }

    #[test]
    fn test_execute_exit() {
        let mut executor = setup_test_env();
        assert_eq!(run(&mut executor, "exit").unwrap(), Outcome::Exit(0));
        assert_eq!(run(&mut executor, "exit 3").unwrap(), Outcome::Exit(0));
        assert!(calls(&executor).is_empty());
    }

    #[test]
    fn test_alias_to_exit() {
        let mut executor = setup_test_env();
        run(&mut executor, "alias q=exit").unwrap();
        assert_eq!(run(&mut executor, "q").unwrap(), Outcome::Exit(0));
    }

    #[test]
    #[serial]
    fn test_execute_cd() {
        let original = env::current_dir().unwrap();
        let temp = tempfile::tempdir().unwrap();
        let mut executor = setup_test_env();

        let target = temp.path().to_string_lossy().into_owned();
        run(&mut executor, &format!("cd {}", target)).unwrap();
        let moved = env::current_dir().unwrap();

        let result = run(&mut executor, "cd /path/that/does/not/exist");
        let after_failure = env::current_dir().unwrap();

        env::set_current_dir(&original).unwrap();
        assert_eq!(moved.canonicalize().unwrap(), temp.path().canonicalize().unwrap());
        assert!(matches!(result, Err(CommandError::ChangeDir { .. })));
        assert_eq!(after_failure, moved);
        assert!(calls(&executor).is_empty());
    }

    #[test]
    #[serial]
    fn test_alias_to_cd() {
        let original = env::current_dir().unwrap();
        let temp = tempfile::tempdir().unwrap();
        let mut executor = setup_test_env();

        run(
            &mut executor,
            &format!("alias go='cd {}'", temp.path().display()),
        )
        .unwrap();
        let result = run(&mut executor, "go");
        let moved = env::current_dir().unwrap();

        env::set_current_dir(&original).unwrap();
        result.unwrap();
        assert_eq!(moved.canonicalize().unwrap(), temp.path().canonicalize().unwrap());
    }

    #[test]
    #[serial]
    fn test_execute_unknown_command() {
        let mut executor = CommandExecutor::new();
        let result = executor.execute("nonexistent-binary-xyz --flag", &mut std::io::sink());

        match result {
            Err(CommandError::Process(err)) => {
                assert_eq!(err.command(), "nonexistent-binary-xyz");
                assert!(err.to_string().contains("nonexistent-binary-xyz"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::Alias(AliasError::Empty),
            CommandError::HomeDir(UserError::HomeDirNotFound),
            CommandError::ChangeDir {
                path: PathBuf::from("/missing"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            },
            CommandError::Io(std::io::Error::new(std::io::ErrorKind::Other, "io error")),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
