use crate::domain::AppError;

/// A single keystroke read in raw mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// Printable character.
    Char(char),
    Backspace,
    Enter,
    /// Ctrl+C.
    Interrupt,
    /// Anything else (arrows, function keys); ignored by masked prompts.
    Other,
}

/// Port for operator interaction.
///
/// Production uses the console; tests drive an in-memory stream.
pub trait Terminal {
    /// Write text without a trailing newline.
    fn write(&mut self, text: &str) -> Result<(), AppError>;

    /// Write a full line.
    fn write_line(&mut self, line: &str) -> Result<(), AppError>;

    /// Show `question` and read one echoed line, without its line terminator.
    fn read_line(&mut self, question: &str) -> Result<String, AppError>;

    /// Read one keystroke without echo.
    fn read_key(&mut self) -> Result<Keystroke, AppError>;

    /// Erase the last echoed character on the current line.
    fn erase_char(&mut self) -> Result<(), AppError> {
        self.write("\u{8} \u{8}")
    }
}
