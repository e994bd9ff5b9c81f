use std::fmt;

use tracing::{debug, warn};

use super::*;

/// In-memory contact list plus the backend it is persisted through.
pub struct ContactManager {
    pub mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

/// Outcome of [`ContactManager::load`]. Loading never fails; a missing or
/// unreadable file leaves the list empty and is reported through `Display`.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    Missing { location: String },
    Unreadable { location: String },
}

impl LoadStatus {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, LoadStatus::Loaded(_))
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loaded(count) => write!(f, "Loaded {} contacts.", count),
            LoadStatus::Missing { location } => write!(
                f,
                "File {} not found. Starting with an empty contact list.",
                location
            ),
            LoadStatus::Unreadable { location } => write!(
                f,
                "Error reading {}. Starting with an empty contact list.",
                location
            ),
        }
    }
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Builds a manager over `storage` and loads it straight away.
    pub fn open(storage: Box<dyn ContactStore>) -> (Self, LoadStatus) {
        let mut manager = Self::new(storage);
        let status = manager.load();
        (manager, status)
    }

    pub fn load(&mut self) -> LoadStatus {
        let location = self.storage.location().to_string();

        match self.storage.load() {
            Ok(contacts) => {
                debug!(location = %location, count = contacts.len(), "loaded contacts");
                self.mem = contacts;
                LoadStatus::Loaded(self.mem.len())
            }
            Err(e) if e.is_missing_file() => {
                warn!(location = %location, "contact file not found");
                self.mem.clear();
                LoadStatus::Missing { location }
            }
            Err(e) => {
                warn!(location = %location, error = %e, "contact file unreadable");
                self.mem.clear();
                LoadStatus::Unreadable { location }
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)?;
        debug!(location = %self.storage.location(), count = self.mem.len(), "saved contacts");
        Ok(())
    }

    pub fn contact_list(&self) -> Vec<&Contact> {
        self.mem.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn add_contact(&mut self, contact: Contact) {
        debug!(name = %contact.name, "adding contact");
        self.mem.push(contact);
    }

    /// Removes the contact at 1-based `position` as shown in a listing.
    pub fn delete_contact(&mut self, position: usize) -> Result<Contact, AppError> {
        if (1..=self.mem.len()).contains(&position) {
            let removed = self.mem.remove(position - 1);
            debug!(position, name = %removed.name, "deleted contact");
            Ok(removed)
        } else {
            Err(AppError::NotFound(format!("Contact #{}", position)))
        }
    }

    /// Contacts whose name contains `term`, ignoring case, in list order.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let found: Vec<&Contact> = self
            .mem
            .iter()
            .filter(|contact| contact.name_contains(term))
            .collect();

        debug!(term, matches = found.len(), "searched contacts");
        found
    }
}
