use std::io::{self, IsTerminal};

use minish::config::ShellConfig;
use minish::input::{EditorReader, StdinReader};
use minish::logging;
use minish::shell::Shell;

fn main() -> Result<(), minish::error::ShellError> {
    let config = ShellConfig::from_env();
    logging::init(&config);

    if io::stdin().is_terminal() {
        Shell::new(EditorReader::new()?, config).run()
    } else {
        tracing::debug!("stdin is not a terminal, reading lines directly");
        Shell::new(StdinReader::stdin(), config).run()
    }
}
