pub mod json;
pub mod memory;

use crate::prelude::{AppError, Contact};
use dotenv::dotenv;
use std::fs;
use std::path::Path;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    /// Where the contacts live, for user-facing notices.
    fn location(&self) -> &str;
}

/// Backing file path: `CONTACTS_FILE` (a `.env` file is honored),
/// falling back to `contacts.json` in the working directory.
pub fn storage_path() -> String {
    dotenv().ok();

    std::env::var("CONTACTS_FILE")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string())
}

pub fn parse_store() -> Box<dyn ContactStore> {
    Box::new(json::JsonStorage::new(storage_path()))
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
