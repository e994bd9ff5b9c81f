use std::str::FromStr;

use crate::errors::AppError;

/// Commands understood at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add a new contact
    Add,
    /// Delete a contact by its listed number
    Delete,
    /// Search contacts by name
    Search,
    /// Save and leave
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "delete" => Ok(Command::Delete),
            "search" => Ok(Command::Search),
            "q" => Ok(Command::Quit),
            _ => Err(AppError::ParseCommand(input.to_string())),
        }
    }
}
