use std::collections::HashMap;

use thiserror::Error;

use super::parser::{parse_line, CommandLine, ParsedLine};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("Usage: alias name='command'")]
    Usage,
    #[error("Invalid alias format. Use: alias name='command'")]
    MissingSeparator,
    #[error("Alias name or command cannot be empty")]
    Empty,
}

/// A validated `name=command` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDefinition {
    pub name: String,
    pub command: String,
}

impl AliasDefinition {
    /// Parses the text following the `alias` keyword.
    ///
    /// Splits on the first `=`. Quote characters wrapping the command are
    /// stripped, not interpreted.
    pub fn parse(definition: &str) -> Result<Self, AliasError> {
        let definition = definition.trim();
        if definition.is_empty() {
            return Err(AliasError::Usage);
        }

        let (name, command) = definition
            .split_once('=')
            .ok_or(AliasError::MissingSeparator)?;

        let name = name.trim();
        let command = command
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .trim();

        if name.is_empty() || command.is_empty() {
            return Err(AliasError::Empty);
        }

        Ok(Self {
            name: name.to_string(),
            command: command.to_string(),
        })
    }
}

#[derive(Debug, Default)]
pub struct AliasTable {
    aliases: HashMap<Box<str>, Box<str>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, definition: AliasDefinition) {
        tracing::debug!(name = %definition.name, command = %definition.command, "alias defined");
        self.aliases
            .insert(definition.name.into(), definition.command.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Replaces the first token with its alias, if any. Single pass: the
    /// replacement itself is never looked up again.
    pub fn resolve(&self, line: CommandLine) -> CommandLine {
        let Some(command) = self.get(line.name()) else {
            return line;
        };

        let expanded = if line.args().is_empty() {
            command.to_string()
        } else {
            format!("{} {}", command, line.args().join(" "))
        };
        tracing::trace!(from = line.name(), to = %expanded, "alias resolved");

        match parse_line(&expanded) {
            ParsedLine::Command(resolved) => resolved,
            ParsedLine::Empty => line,
        }
    }
}
