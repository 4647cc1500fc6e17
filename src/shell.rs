use std::io::{self, Stderr, Stdout, Write};

use crate::config::ShellConfig;
use crate::core::commands::{CommandExecutor, Outcome};
use crate::error::ShellError;
use crate::input::{LineReader, ReadError};
use crate::process::{ProcessExecutor, ProcessRunner};
use crate::prompt::PromptRenderer;

/// One interactive session: prompt, read, dispatch, repeat.
pub struct Shell<R, P: ProcessRunner = ProcessExecutor, O = Stdout, E = Stderr> {
    reader: R,
    renderer: PromptRenderer,
    error_label: String,
    executor: CommandExecutor<P>,
    out: O,
    err: E,
}

impl<R: LineReader> Shell<R> {
    pub fn new(reader: R, config: ShellConfig) -> Self {
        Self::with_parts(reader, config, CommandExecutor::new(), io::stdout(), io::stderr())
    }
}

impl<R: LineReader, P: ProcessRunner, O: Write, E: Write> Shell<R, P, O, E> {
    pub fn with_parts(
        reader: R,
        config: ShellConfig,
        executor: CommandExecutor<P>,
        out: O,
        err: E,
    ) -> Self {
        Self {
            reader,
            error_label: config.error_label.clone(),
            renderer: PromptRenderer::new(config),
            executor,
            out,
            err,
        }
    }

    /// Runs until `exit`, then terminates the process without cleanup.
    pub fn run(&mut self) -> ! {
        loop {
            if let Outcome::Exit(code) = self.step() {
                let _ = self.out.flush();
                std::process::exit(code);
            }
        }
    }

    /// One full iteration of the loop.
    pub fn step(&mut self) -> Outcome {
        let prompt = self.renderer.render(&mut self.err);
        match self.reader.read_line(&prompt) {
            Ok(line) => self.execute_line(&line),
            Err(e) => {
                self.report_read_error(e);
                Outcome::Continue
            }
        }
    }

    /// Dispatches one line, reporting any failure. Never fails itself.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        match self.executor.execute(line, &mut self.out) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.report(ShellError::from(e));
                Outcome::Continue
            }
        }
    }

    pub fn executor(&self) -> &CommandExecutor<P> {
        &self.executor
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    fn report_read_error(&mut self, e: ReadError) {
        tracing::trace!(error = ?e, "read failed");
        self.report(ShellError::from(e));
    }

    fn report(&mut self, e: ShellError) {
        let _ = match e {
            ShellError::Command(inner) => writeln!(self.err, "{}: {}", self.error_label, inner),
            other => writeln!(self.err, "{}", other),
        };
    }
}
