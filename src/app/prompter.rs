//! Question/answer loop over a [`Terminal`].

use crate::domain::AppError;
use crate::ports::{Keystroke, Terminal};

/// Placeholder echoed for each masked character.
pub const MASK_GLYPH: &str = "*";

/// Validation hook: `Err(message)` rejects the answer and re-asks.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Descriptor for a single question.
#[derive(Clone, Copy)]
pub struct PromptSpec<'a> {
    pub question: &'a str,
    pub default: Option<&'a str>,
    pub masked: bool,
    pub validate: Option<Validator<'a>>,
}

impl<'a> PromptSpec<'a> {
    pub fn new(question: &'a str) -> Self {
        Self { question, default: None, masked: false, validate: None }
    }

    /// Answer returned when the operator submits an empty line.
    pub fn default(mut self, value: &'a str) -> Self {
        self.default = Some(value);
        self
    }

    /// Hide input behind [`MASK_GLYPH`]. Masked prompts ignore defaults and validators.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn validate(mut self, validator: Validator<'a>) -> Self {
        self.validate = Some(validator);
        self
    }
}

/// Asks questions on a terminal, re-asking until answers validate.
pub struct Prompter<T: Terminal> {
    terminal: T,
}

impl<T: Terminal> Prompter<T> {
    pub fn new(terminal: T) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Print a line of operator-facing output.
    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        self.terminal.write_line(line)
    }

    /// Print an error line, prefixed with ❌.
    pub fn complain(&mut self, message: &str) -> Result<(), AppError> {
        self.terminal.write_line(&format!("❌ {}", message))
    }

    pub fn ask(&mut self, spec: PromptSpec<'_>) -> Result<String, AppError> {
        if spec.masked {
            return self.read_masked(spec.question);
        }

        loop {
            let answer = self.terminal.read_line(spec.question)?;
            if let Some(validate) = spec.validate {
                // Raw answer is validated before the default applies.
                if let Err(message) = validate(&answer) {
                    self.complain(&message)?;
                    continue;
                }
            }
            if answer.is_empty() {
                return Ok(spec.default.unwrap_or_default().to_string());
            }
            return Ok(answer);
        }
    }

    fn read_masked(&mut self, question: &str) -> Result<String, AppError> {
        self.terminal.write(&format!("{}: ", question))?;
        let mut buffer = String::new();
        loop {
            match self.terminal.read_key()? {
                Keystroke::Char(c) => {
                    buffer.push(c);
                    self.terminal.write(MASK_GLYPH)?;
                }
                Keystroke::Backspace => {
                    if buffer.pop().is_some() {
                        self.terminal.erase_char()?;
                    }
                }
                Keystroke::Enter => {
                    self.terminal.write("\n")?;
                    return Ok(buffer);
                }
                Keystroke::Interrupt => {
                    self.terminal.write("\n")?;
                    return Err(AppError::Interrupted);
                }
                Keystroke::Other => {}
            }
        }
    }
}
