//! Member entity.

use super::super::value_objects::Gender;
use crate::{Entity, MemberId};
use serde::{Deserialize, Serialize};

/// Member entity as stored by the persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Database-assigned identifier; `None` until the member is saved.
    pub id: Option<MemberId>,

    /// Display name.
    pub username: String,

    /// Contact telephone number.
    pub telephone: String,

    /// Age in years.
    pub age: u32,

    /// Gender.
    pub gender: Gender,
}

impl Member {
    /// Creates a new, not yet persisted member.
    #[must_use]
    pub fn create(username: String, telephone: String, age: u32, gender: Gender) -> Self {
        Self {
            id: None,
            username,
            telephone,
            age,
            gender,
        }
    }

    /// Rebuilds a persisted member from stored values.
    #[must_use]
    pub fn with_id(id: MemberId, username: String, telephone: String, age: u32, gender: Gender) -> Self {
        Self {
            id: Some(id),
            username,
            telephone,
            age,
            gender,
        }
    }

    /// Replaces every mutable field.
    pub fn update(&mut self, username: String, telephone: String, age: u32, gender: Gender) {
        self.username = username;
        self.telephone = telephone;
        self.age = age;
        self.gender = gender;
    }

    /// Checks if the member has been persisted.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Entity<MemberId> for Member {
    fn id(&self) -> Option<MemberId> {
        self.id
    }
}
