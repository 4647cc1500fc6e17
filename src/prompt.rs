use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use inksac::prelude::*;

use crate::config::ShellConfig;
use crate::core::user::{self, UserError};
use crate::error::ShellError;

/// Abbreviates `cwd` with `~` when it lies under `home`.
pub fn display_path(cwd: &Path, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return cwd.display().to_string();
    };

    match cwd.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => cwd.display().to_string(),
    }
}

/// Source of the home directory shown as `~`.
pub type HomeLookup = fn() -> Result<PathBuf, UserError>;

#[derive(Debug, Clone)]
pub struct PromptRenderer {
    config: ShellConfig,
    home_lookup: HomeLookup,
}

impl PromptRenderer {
    pub fn new(config: ShellConfig) -> Self {
        Self::with_home_lookup(config, user::current_user_home)
    }

    pub fn with_home_lookup(config: ShellConfig, home_lookup: HomeLookup) -> Self {
        Self {
            config,
            home_lookup,
        }
    }

    /// Builds the two-line prompt: directory, then the marker and a space.
    pub fn format(&self, display_path: &str) -> String {
        if !self.config.colored {
            return format!("{}\n{} ", display_path, self.config.marker);
        }

        let dir_style = Style::builder().foreground(Color::Cyan).build();
        let marker_style = Style::builder().foreground(Color::Magenta).build();
        format!(
            "{}\n{} ",
            display_path.style(dir_style),
            self.config.marker.as_str().style(marker_style)
        )
    }

    /// Reads the working directory and user home and formats the prompt.
    /// Lookup failures degrade the prompt; a missing user is reported to `err`.
    pub fn render<E: Write>(&self, err: &mut E) -> String {
        let display = match env::current_dir() {
            Ok(cwd) => {
                let home = match (self.home_lookup)() {
                    Ok(home) => Some(home),
                    Err(e) => {
                        let _ = writeln!(err, "{}", ShellError::from(e));
                        None
                    }
                };
                display_path(&cwd, home.as_deref())
            }
            Err(e) => {
                tracing::debug!(error = %e, "working directory unavailable");
                self.config.placeholder_dir.clone()
            }
        };

        self.format(&display)
    }
}
