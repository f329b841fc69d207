//! Generic contact record kept alongside students.

use super::fields::{Name, Phone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Contact entry without student-specific data.
///
/// Identity is the name: two persons with the same name are the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Option<Phone>,
}

impl Person {
    pub fn new(name: Name) -> Self {
        Self { name, phone: None }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(phone) = &self.phone {
            write!(f, "; Phone: {phone}")?;
        }
        Ok(())
    }
}
