/// A line split into whitespace-delimited tokens. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn name(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or whitespace-only input.
    Empty,
    Command(CommandLine),
}

pub fn parse_line(input: &str) -> ParsedLine {
    let tokens: Vec<String> = input.split_whitespace().map(String::from).collect();
    match CommandLine::from_tokens(tokens) {
        Some(line) => ParsedLine::Command(line),
        None => ParsedLine::Empty,
    }
}
