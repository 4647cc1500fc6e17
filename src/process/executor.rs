use std::process::{Command, Stdio};

use super::{ProcessError, ProcessRunner};

/// Spawns programs with the shell's stdout and stderr attached.
///
/// Children get a null stdin so they cannot consume lines the shell has
/// buffered but not yet dispatched.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for ProcessExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        tracing::debug!(program, ?args, "spawning process");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ProcessError::Spawn {
                command: program.to_string(),
                source,
            })?;

        tracing::debug!(program, %status, "process exited");
        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Failed {
                command: program.to_string(),
                status,
            })
        }
    }
}
