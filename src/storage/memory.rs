use super::*;

/// Non-persistent backend: `load` hands back the seeded contacts and
/// `save` discards its input.
#[derive(Default)]
pub struct MemStorage {
    pub data: Vec<Contact>,
}

impl MemStorage {
    pub fn with_contacts(data: Vec<Contact>) -> Self {
        Self { data }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.clone())
    }

    fn save(&self, _contacts: &[Contact]) -> Result<(), AppError> {
        Ok(())
    }

    fn location(&self) -> &str {
        "memory"
    }
}
