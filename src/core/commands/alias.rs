use std::io::Write;

use super::{Command, CommandError, Invocation, Outcome};
use crate::core::aliases::AliasDefinition;

/// Text after the leading `alias` keyword, untouched by tokenization so
/// spaces inside the quoted command survive.
fn definition_text(input: &str) -> &str {
    input
        .trim_start()
        .strip_prefix("alias")
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AliasCommand;

impl AliasCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for AliasCommand {
    fn execute<W: Write>(&self, invocation: Invocation<'_, W>) -> Result<Outcome, CommandError> {
        let definition = AliasDefinition::parse(definition_text(invocation.input))?;
        let confirmation = format!(
            "Alias '{}' set to '{}'",
            definition.name, definition.command
        );

        invocation.aliases.define(definition);
        writeln!(invocation.out, "{}", confirmation)?;
        Ok(Outcome::Continue)
    }
}
