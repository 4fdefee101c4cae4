use std::io;

use thiserror::Error;

use super::deployment::Setting;

/// Library-wide error type for provisioning runs.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure (terminal or filesystem).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or settings file issue.
    #[error("{0}")]
    Configuration(String),

    /// Operator pressed Ctrl+C while a prompt was active.
    #[error("Interrupted by user")]
    Interrupted,

    /// Standard input reached end of stream before the prompt was answered.
    #[error("Input closed while waiting for: {0}")]
    InputClosed(String),

    /// A setting required by the artifacts was never resolved.
    #[error("Setting '{}' has not been resolved", .0.key())]
    MissingSetting(Setting),

    /// App name cannot be turned into a deployment URL.
    #[error("Invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    /// Artifact template failed to render.
    #[error("Failed to render {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit status for this error.
    ///
    /// Interrupts follow the shell convention of `128 + SIGINT`.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted => 130,
            _ => 1,
        }
    }

    pub fn is_interrupt(&self) -> bool {
        matches!(self, AppError::Interrupted)
    }
}
