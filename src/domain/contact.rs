use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, age: i64, email: String) -> Self {
        Contact { name, age, email }
    }

    /// Case-insensitive substring match against the name only.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// One line of a numbered listing; `position` starts at 1.
    pub fn listing(&self, position: usize) -> String {
        format!(
            "{}. {} | Age: {} | Email: {}",
            position, self.name, self.age, self.email
        )
    }
}
