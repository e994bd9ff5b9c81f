use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::prelude::{AppError, Contact};

pub const EMPTY_LISTING: &str = "No contacts found.";

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Prints `message` without a newline and reads one line as typed,
    /// minus the line terminator. Bytes that are not UTF-8 are replaced
    /// rather than rejected. `None` means end of input.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }

    /// Prompts until `parse` accepts the input. A `Validation` error is
    /// shown to the user and the prompt repeats; other errors propagate.
    pub fn retry<T, F>(&mut self, message: &str, mut parse: F) -> Result<Option<T>, AppError>
    where
        F: FnMut(&str) -> Result<T, AppError>,
    {
        loop {
            let Some(input) = self.prompt(message)? else {
                return Ok(None);
            };

            match parse(&input) {
                Ok(value) => return Ok(Some(value)),
                Err(AppError::Validation(reason)) => self.say(reason)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Numbered listing starting at 1, or a placeholder when empty.
    pub fn display_contacts(&mut self, contacts: &[&Contact]) -> Result<(), AppError> {
        if contacts.is_empty() {
            return self.say(EMPTY_LISTING);
        }

        for (i, contact) in contacts.iter().enumerate() {
            self.say(contact.listing(i + 1))?;
        }
        Ok(())
    }
}
