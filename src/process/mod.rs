use std::process::ExitStatus;

use thiserror::Error;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to execute '{command}': {status}")]
    Failed { command: String, status: ExitStatus },
}

impl ProcessError {
    /// Name of the program the shell tried to run.
    pub fn command(&self) -> &str {
        match self {
            ProcessError::Spawn { command, .. } | ProcessError::Failed { command, .. } => command,
        }
    }
}

/// Runs an external program to completion.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<(), ProcessError>;
}
