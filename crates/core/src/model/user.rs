use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// An account holder, as returned by the API inside project payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl User {
    /// "Name Surname", with either half omitted when blank.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if !self.name.trim().is_empty() {
            parts.push(self.name.trim());
        }
        if !self.surname.trim().is_empty() {
            parts.push(self.surname.trim());
        }
        parts.join(" ")
    }

    /// Uppercase initials for avatar badges, e.g. "AR" for "Andrea Rossi".
    #[must_use]
    pub fn initials(&self) -> String {
        [&self.name, &self.surname]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
