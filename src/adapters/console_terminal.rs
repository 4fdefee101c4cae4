use std::io::{self, ErrorKind};

use console::{Key, Term};
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::{Keystroke, Terminal};

/// Interactive terminal on the process console.
///
/// Prompts, messages and masked echo all go to one TTY stream so the
/// operator sees them even when the other stream is redirected.
pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    pub fn stdout() -> Self {
        Self { term: Term::stdout() }
    }

    /// Console on stderr, for runs whose stdout is piped.
    pub fn stderr() -> Self {
        Self { term: Term::stderr() }
    }
}

impl Terminal for ConsoleTerminal {
    fn write(&mut self, text: &str) -> Result<(), AppError> {
        self.term.write_str(text)?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        self.term.write_line(line)?;
        Ok(())
    }

    fn read_line(&mut self, question: &str) -> Result<String, AppError> {
        match Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text_on(&self.term)
        {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Interrupted)
            }
            Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
        }
    }

    fn read_key(&mut self) -> Result<Keystroke, AppError> {
        keystroke(self.term.read_key())
    }

    fn erase_char(&mut self) -> Result<(), AppError> {
        self.term.clear_chars(1)?;
        Ok(())
    }
}

impl Drop for ConsoleTerminal {
    fn drop(&mut self) {
        // Restore the cursor in case a prompt was interrupted mid-draw.
        let _ = self.term.show_cursor();
    }
}

/// Map a raw console read to a masked-prompt keystroke.
///
/// console reports Ctrl+C in raw mode as an `Interrupted` read error.
fn keystroke(read: io::Result<Key>) -> Result<Keystroke, AppError> {
    match read {
        Ok(Key::Char('\u{3}')) => Ok(Keystroke::Interrupt),
        Ok(Key::Char(c)) if c.is_control() => Ok(Keystroke::Other),
        Ok(Key::Char(c)) => Ok(Keystroke::Char(c)),
        Ok(Key::Backspace) => Ok(Keystroke::Backspace),
        Ok(Key::Enter) => Ok(Keystroke::Enter),
        Ok(_) => Ok(Keystroke::Other),
        Err(err) if err.kind() == ErrorKind::Interrupted => Ok(Keystroke::Interrupt),
        Err(err) => Err(AppError::Io(err)),
    }
}
