use inksac::prelude::*;

/// Runtime settings for a shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Shown in the prompt when the working directory cannot be read.
    pub placeholder_dir: String,
    pub marker: String,
    /// Prefix for failed builtins and external commands.
    pub error_label: String,
    pub colored: bool,
    /// Environment variable holding the log filter.
    pub log_env: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            placeholder_dir: "/unknown".to_string(),
            marker: "❯".to_string(),
            error_label: "Command error".to_string(),
            colored: true,
            log_env: "MINISH_LOG".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            colored: !matches!(support, ColorSupport::NoColor),
            ..Self::default()
        }
    }

    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }
}
