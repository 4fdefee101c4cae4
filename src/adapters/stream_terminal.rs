use std::io::{BufRead, Cursor, Write};

use crate::domain::AppError;
use crate::ports::{Keystroke, Terminal};

/// Terminal over plain byte streams.
///
/// Used when stdin is not a TTY (piped answers) and as the in-memory
/// terminal in tests. Masked prompts read characters from the stream.
pub struct StreamTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>, AppError> {
        let buf = self.input.fill_buf()?;
        Ok(buf.first().copied())
    }

    fn next_byte(&mut self) -> Result<Option<u8>, AppError> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.input.consume(1);
        }
        Ok(byte)
    }

    fn next_char(&mut self, first: u8) -> Result<Keystroke, AppError> {
        let width = utf8_width(first);
        let mut bytes = vec![first];
        while bytes.len() < width {
            match self.next_byte()? {
                Some(byte) => bytes.push(byte),
                None => break,
            }
        }
        Ok(std::str::from_utf8(&bytes)
            .ok()
            .and_then(|s| s.chars().next())
            .map(Keystroke::Char)
            .unwrap_or(Keystroke::Other))
    }
}

impl StreamTerminal<Cursor<Vec<u8>>, Vec<u8>> {
    /// Terminal that answers from `script` and records everything written.
    pub fn scripted(script: &str) -> Self {
        Self::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl<R: BufRead, W: Write> Terminal for StreamTerminal<R, W> {
    fn write(&mut self, text: &str) -> Result<(), AppError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self, question: &str) -> Result<String, AppError> {
        self.write(&format!("{}: ", question))?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed(question.to_string()));
        }
        if line.contains('\u{3}') {
            return Err(AppError::Interrupted);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        // Piped input is not echoed by a TTY, keep the transcript readable.
        self.write("\n")?;
        Ok(trimmed)
    }

    fn read_key(&mut self) -> Result<Keystroke, AppError> {
        let Some(byte) = self.next_byte()? else {
            return Err(AppError::InputClosed("masked input".to_string()));
        };
        match byte {
            0x03 => Ok(Keystroke::Interrupt),
            b'\n' => Ok(Keystroke::Enter),
            b'\r' => {
                if self.peek_byte()? == Some(b'\n') {
                    self.input.consume(1);
                }
                Ok(Keystroke::Enter)
            }
            0x08 | 0x7f => Ok(Keystroke::Backspace),
            byte if byte < 0x20 => Ok(Keystroke::Other),
            byte => self.next_char(byte),
        }
    }
}

fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    }
}
