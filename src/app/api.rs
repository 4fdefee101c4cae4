//! API Facade for the application.
//!
//! Glues together context creation and command execution.

use std::io::IsTerminal;
use std::path::PathBuf;

use tracing::debug;

use crate::adapters::{
    ConsoleTerminal, FilesystemArtifactStore, ProcessEnvironment, StreamTerminal,
};
use crate::app::AppContext;
use crate::app::commands::provision as provision_command;
use crate::app::config::load_settings;
use crate::domain::secrets::SecretGenerator;

pub use crate::app::commands::provision::{EmittedArtifacts, ProvisionOutcome};
pub use crate::domain::AppError;

/// Options for a provisioning run.
#[derive(Debug, Clone, Default)]
pub struct ProvisionOptions {
    /// Directory receiving `.env` and `deploy.sh`; the current directory when unset.
    pub output_dir: Option<PathBuf>,
    /// Explicit settings file.
    pub config_path: Option<PathBuf>,
}

/// Where prompts are read from and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalChoice {
    /// Raw-mode console rendered on stdout.
    ConsoleStdout,
    /// Raw-mode console rendered on stderr; stdout is redirected.
    ConsoleStderr,
    /// Plain line reading; stdin is not a terminal.
    Stream,
}

/// Pick the terminal for a run from which standard streams are TTYs.
///
/// A TTY on stdin always gets the raw-mode console so masked entry is never
/// echoed by the line discipline. The console needs a TTY to render on.
fn choose_terminal(
    stdin_tty: bool,
    stdout_tty: bool,
    stderr_tty: bool,
) -> Result<TerminalChoice, AppError> {
    match (stdin_tty, stdout_tty, stderr_tty) {
        (false, _, _) => Ok(TerminalChoice::Stream),
        (true, true, _) => Ok(TerminalChoice::ConsoleStdout),
        (true, false, true) => Ok(TerminalChoice::ConsoleStderr),
        (true, false, false) => Err(AppError::config_error(
            "stdin is a terminal but neither stdout nor stderr is; \
             keep one of them on the terminal or pipe the answers into stdin",
        )),
    }
}

/// Run the interactive provisioning flow on the process terminal.
///
/// Piped answers on stdin are read as plain lines; otherwise the console
/// prompts in raw mode.
pub fn provision(options: &ProvisionOptions) -> Result<ProvisionOutcome, AppError> {
    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let settings = load_settings(options.config_path.as_deref(), &output_dir)?;
    let store = FilesystemArtifactStore::new(output_dir);

    let choice = choose_terminal(
        std::io::stdin().is_terminal(),
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    )?;
    debug!(?choice, "terminal selected");

    let console = match choice {
        TerminalChoice::ConsoleStdout => ConsoleTerminal::stdout(),
        TerminalChoice::ConsoleStderr => ConsoleTerminal::stderr(),
        TerminalChoice::Stream => {
            let stdin = std::io::stdin();
            let terminal = StreamTerminal::new(stdin.lock(), std::io::stdout());
            let mut ctx = AppContext::new(
                terminal,
                ProcessEnvironment,
                store,
                SecretGenerator::new(),
                settings,
            );
            return provision_command::execute(&mut ctx);
        }
    };
    let mut ctx =
        AppContext::new(console, ProcessEnvironment, store, SecretGenerator::new(), settings);
    provision_command::execute(&mut ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piped_stdin_reads_plain_lines() {
        for (stdout_tty, stderr_tty) in [(true, true), (false, true), (false, false)] {
            assert_eq!(
                choose_terminal(false, stdout_tty, stderr_tty).unwrap(),
                TerminalChoice::Stream
            );
        }
    }

    #[test]
    fn interactive_stdin_uses_console_on_stdout() {
        assert_eq!(choose_terminal(true, true, true).unwrap(), TerminalChoice::ConsoleStdout);
        assert_eq!(choose_terminal(true, true, false).unwrap(), TerminalChoice::ConsoleStdout);
    }

    #[test]
    fn piped_stdout_keeps_raw_mode_on_stderr() {
        assert_eq!(choose_terminal(true, false, true).unwrap(), TerminalChoice::ConsoleStderr);
    }

    #[test]
    fn interactive_stdin_without_output_terminal_is_refused() {
        let err = choose_terminal(true, false, false).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
