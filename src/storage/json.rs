use super::*;

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{Read, Write};

/// On-disk shape: `{"contacts": [{name, age, email}, ...]}`.
#[derive(Debug, Serialize, Deserialize)]
struct ContactsFile {
    contacts: Vec<Contact>,
}

#[derive(Serialize)]
struct ContactsFileRef<'a> {
    contacts: &'a [Contact],
}

pub struct JsonStorage {
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let parsed: ContactsFile = serde_json::from_str(&data)?;
        Ok(parsed.contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        // serde_json's pretty printer indents with two spaces
        let json_contacts = serde_json::to_string_pretty(&ContactsFileRef { contacts })?;
        file.write_all(json_contacts.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    fn location(&self) -> &str {
        &self.path
    }
}
